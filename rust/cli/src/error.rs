//! Error types for the CLI application.

use std::fmt;

use holdem_engine::cards::ParseCardError;
use holdem_engine::errors::GameError;

use crate::config::ConfigError;

/// Everything a command can fail with. Each variant maps to an exit code in
/// [`crate::run`].
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdin reads, stdout/stderr writes, config file)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Fatal engine error; the session cannot continue
    Engine(String),

    /// Input was interrupted (e.g. Ctrl+C while reading a command)
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::Interrupted {
            CliError::Interrupted(error.to_string())
        } else {
            CliError::Io(error)
        }
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        match error {
            GameError::InvalidSetup(_) | GameError::InvalidCardCount(_) => {
                CliError::InvalidInput(error.to_string())
            }
            other => CliError::Engine(other.to_string()),
        }
    }
}

impl From<ParseCardError> for CliError {
    fn from(error: ParseCardError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}
