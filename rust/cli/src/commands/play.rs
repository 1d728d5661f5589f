//! # Play Command
//!
//! Hot-seat heads-up hold'em on one terminal. Both players type at the same
//! prompt; the waiting player's hole cards are hidden in the table view.
//!
//! ## Features
//!
//! - Table settings from config file and environment, overridden by flags
//! - Every engine notification printed as it happens
//! - Refused actions reported on stderr, then the same player is prompted again
//! - Stops on game over, `q`/`quit`, end of input or the optional round limit

use std::io::{BufRead, Write};

use holdem_engine::config::TableConfig;
use holdem_engine::engine::Engine;
use holdem_engine::events::{EventLog, GameEvent};
use holdem_engine::rules::Blinds;

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_action, format_table};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};

/// Command-line overrides for the table. `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub p1: Option<String>,
    pub p2: Option<String>,
    pub stack: Option<u32>,
    pub seed: Option<u64>,
    pub blinds: Option<Blinds>,
    /// Stop before dealing round `rounds + 1`
    pub rounds: Option<u32>,
}

impl PlayOptions {
    fn apply(&self, mut table: TableConfig) -> TableConfig {
        if let Some(name) = &self.p1 {
            table.player_names[0] = name.clone();
        }
        if let Some(name) = &self.p2 {
            table.player_names[1] = name.clone();
        }
        if let Some(stack) = self.stack {
            table.starting_stack = stack;
        }
        if self.blinds.is_some() {
            table.blinds = self.blinds;
        }
        // always seeded so the printed seed replays the game
        table.seed = Some(self.seed.or(table.seed).unwrap_or_else(rand::random));
        table.with_setup_defaults()
    }
}

/// Handle the play command.
///
/// # Returns
///
/// * `Ok(())` when the game ends, the user quits or input runs out
/// * `Err(CliError)` on bad configuration, a fatal engine error or I/O failure
pub fn handle_play_command(
    opts: PlayOptions,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };
    let table = opts.apply(resolved.config);
    execute_play_command(&table, opts.rounds, stdin, out, err)
}

fn execute_play_command(
    table: &TableConfig,
    rounds: Option<u32>,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let log = EventLog::new();
    let mut engine = Engine::new();
    engine.subscribe(log.clone());

    writeln!(
        out,
        "play: {} vs {} stack={} seed={}",
        table.player_names[0],
        table.player_names[1],
        table.starting_stack,
        table.seed.unwrap_or_default()
    )?;
    if let Some(b) = table.blinds {
        writeln!(out, "Blinds: SB={} BB={}", b.small, b.big)?;
    }
    engine.start_game(table)?;
    print_events(&log, out, err)?;

    while let Some(state) = engine.state() {
        if state.is_game_over() {
            break;
        }
        if let Some(limit) = rounds
            && state.round() > limit
        {
            writeln!(out, "Round limit of {} reached.", limit)?;
            break;
        }
        let Some(seat) = state.active_index() else {
            break;
        };
        writeln!(out, "{}", format_table(state))?;
        ui::prompt(out, state.players()[seat].name())?;

        let Some(line) = read_stdin_line(stdin)? else {
            writeln!(out)?;
            break;
        };
        let result = match parse_player_action(&line) {
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
            ParseResult::Action(action) => {
                tracing::debug!(seat, action = %format_action(&action), "player input");
                engine.act(seat, action)
            }
            ParseResult::BetText(text) => engine.bet_or_raise_text(&text),
        };
        print_events(&log, out, err)?;
        // refusals were already reported through the event log
        if let Err(e) = result
            && e.is_fatal()
        {
            return Err(e.into());
        }
    }

    write_summary(&engine, out)
}

fn print_events(log: &EventLog, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    for event in log.drain() {
        match event {
            GameEvent::ActionRejected { message, .. } => ui::write_error(err, &message)?,
            other => writeln!(out, "{}", other.message())?,
        }
    }
    Ok(())
}

fn write_summary(engine: &Engine, out: &mut dyn Write) -> Result<(), CliError> {
    let Some(state) = engine.state() else {
        return Ok(());
    };
    // the current round only counts once it has been settled
    let completed = if state.is_game_over() {
        state.round()
    } else {
        state.round().saturating_sub(1)
    };
    writeln!(out, "Rounds played: {}", completed)?;
    for p in state.players() {
        writeln!(out, "{}: {} chips, {} pots won", p.name(), p.stack(), p.wins())?;
    }
    Ok(())
}
