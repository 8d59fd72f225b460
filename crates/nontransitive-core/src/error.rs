//! Error types for the game.

use thiserror::Error;

/// Problems with the move list supplied at startup
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("At least 3 moves are required, got {0}")]
    TooFewMoves(usize),

    #[error("An odd number of moves is required, got {0}")]
    EvenMoveCount(usize),

    #[error("Move names must not repeat: {0:?} appears more than once")]
    DuplicateMove(String),

    #[error("Move names must not be empty")]
    EmptyMoveName,
}

/// Errors from game operations
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(#[source] rand::Error),

    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Unknown move: {0}")]
    UnknownMove(String),

    #[error("Session is {found}, expected {expected}")]
    InvalidState {
        expected: &'static str,
        found: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected line of user input. Recoverable: the caller re-prompts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unrecognized input: {0:?}")]
    Unrecognized(String),

    #[error("Choice {choice} is out of range 0..={max}")]
    OutOfRange { choice: u64, max: usize },
}
