//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; `run` maps errors to
//! the exit codes in [`crate::exit_code`].

use std::fmt;

use cardroom_engine::errors::{GameError, LinkError};

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, state directory access)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// The command needs a game and none has begun
    NoGame,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::NoGame => write!(
                f,
                "No game in progress; start one with `cardroom new <CARDS>` or `cardroom join <LINK>`"
            ),
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
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<LinkError> for CliError {
    fn from(error: LinkError) -> Self {
        CliError::InvalidInput(format!("not a game link ({})", error))
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}
