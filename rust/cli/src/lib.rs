//! # holdem CLI Library
//!
//! Terminal front end for the `holdem_engine` crate. It owns no game rules:
//! commands are forwarded to the engine and its notifications are printed.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the subcommand.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["holdem", "eval", "Ah", "Kh", "Qh", "Jh", "10h"];
//! let mut out = Vec::new();
//! let code = holdem_cli::run(args, &mut out, &mut io::stderr());
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Royal Flush in Hearts"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Hot-seat game for two players on stdin/stdout
//! - `eval`: Evaluate and compare hands
//! - `cfg`: Display current configuration settings

#[macro_use]
mod macros;

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{PlayOptions, handle_cfg_command, handle_eval_command, handle_play_command};
use holdem_engine::rules::Blinds;

pub use error::CliError;

/// Runs the CLI with the process's stdin as play input.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`] with an explicit input stream.
///
/// ```
/// use std::io::Cursor;
/// let args = ["holdem", "play", "--p1", "Ann", "--seed", "3"];
/// let mut input = Cursor::new("check\ncheck\nq\n");
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = holdem_cli::run_with_input(args, &mut input, &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Flop: "));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "eval", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err);
            write_or_exit!(err, "Usage: holdem <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: holdem --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Eval { cards, vs } => handle_eval_command(&cards, vs.as_deref(), out),
        Commands::Play {
            p1,
            p2,
            stack,
            seed,
            small_blind,
            big_blind,
            rounds,
        } => {
            let blinds = match (small_blind, big_blind) {
                (Some(small), Some(big)) => Some(Blinds { small, big }),
                _ => None,
            };
            let opts = PlayOptions {
                p1,
                p2,
                stack,
                seed,
                blinds,
                rounds,
            };
            handle_play_command(opts, input, out, err)
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
