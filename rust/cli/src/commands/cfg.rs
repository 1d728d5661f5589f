//! Configuration command handler.
//!
//! Prints the resolved table settings with the source of each value
//! (default, environment or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "player_names": {
//!     "value": ["Player 1", "Player 2"],
//!     "source": "default"
//!   },
//!   "starting_stack": {
//!     "value": 100,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Loads the configuration with source tracking and writes it as pretty JSON.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "player_names": {
            "value": config.player_names,
            "source": sources.player_names,
        },
        "starting_stack": {
            "value": config.starting_stack,
            "source": sources.starting_stack,
        },
        "blinds": {
            "value": config.blinds,
            "source": sources.blinds,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
