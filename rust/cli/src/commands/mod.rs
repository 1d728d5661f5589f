//! Command handler modules for the holdem CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) passed in
//! - Errors propagated via `CliError`

mod cfg;
mod eval;
mod play;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use play::{PlayOptions, handle_play_command};
