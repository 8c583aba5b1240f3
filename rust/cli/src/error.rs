//! Error types for the CLI application.
//!
//! `CliError` is what every command handler returns; [`crate::run`] maps it to
//! an exit code. Engine conditions arrive as [`GameError`] and are wrapped.

use drawpoker_engine::errors::GameError;
use std::fmt;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Error reported by the game engine
    Engine(GameError),

    /// Round log failed integrity checks
    Integrity(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
            CliError::Integrity(msg) => write!(f, "Integrity check failed: {}", msg),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_keep_their_message() {
        let e: CliError = GameError::InsufficientCredits { credits: 0, bet: 1 }.into();
        assert_eq!(e.to_string(), "Engine error: Not enough credits: have 0, bet 1");
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn io_errors_convert() {
        let e: CliError = std::io::Error::other("disk gone").into();
        assert!(e.to_string().starts_with("I/O error"));
    }
}
