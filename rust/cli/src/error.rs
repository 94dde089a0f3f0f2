//! Errors surfaced by `teenpatti` subcommands.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! the variants onto exit codes in one place.

use std::fmt;

use teenpatti_engine::errors::GameError;

/// Anything a subcommand can fail with. Engine and I/O errors convert in
/// through `From`, so handlers just use `?`.
#[derive(Debug)]
pub enum CliError {
    /// Writing output or reading the reveal prompt failed
    Io(std::io::Error),

    /// Malformed cards or hands typed by the user
    InvalidInput(String),

    /// Unreadable or invalid `TEENPATTI_*` configuration
    Config(String),

    /// Rule or dealing error reported by the engine
    Engine(GameError),

    /// Operation was interrupted (e.g., the player quit mid-round)
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
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
        CliError::Engine(error)
    }
}
