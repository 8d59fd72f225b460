//! Protocol types.

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique round identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    /// Create a new random round ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundId({})", self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Initialized,
    Committed,
    Revealed,
    Exited,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Initialized => "initialized",
            Phase::Committed => "committed",
            Phase::Revealed => "revealed",
            Phase::Exited => "exited",
        }
    }

    /// No further input is accepted
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Revealed | Phase::Exited)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line of player input, once understood
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    /// Zero-based position of the chosen move
    Play(usize),
}

impl Command {
    /// Parse one input line against a menu of `move_count` moves.
    ///
    /// Accepts `0` (exit), `?` (help) or a 1-based menu number.
    pub fn parse(raw: &str, move_count: usize) -> Result<Self, InputError> {
        let line = raw.trim();
        if line == "?" {
            return Ok(Command::Help);
        }

        let choice: u64 = line
            .parse()
            .map_err(|_| InputError::Unrecognized(line.to_string()))?;

        match usize::try_from(choice) {
            Ok(0) => Ok(Command::Exit),
            Ok(n) if n <= move_count => Ok(Command::Play(n - 1)),
            _ => Err(InputError::OutOfRange {
                choice,
                max: move_count,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_id_generation() {
        assert_ne!(RoundId::new(), RoundId::new());
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("0", 3), Ok(Command::Exit));
        assert_eq!(Command::parse("?", 3), Ok(Command::Help));
        assert_eq!(Command::parse("1", 3), Ok(Command::Play(0)));
        assert_eq!(Command::parse(" 3\n", 3), Ok(Command::Play(2)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            Command::parse("foo", 3),
            Err(InputError::Unrecognized("foo".to_string()))
        );
        assert_eq!(
            Command::parse("", 3),
            Err(InputError::Unrecognized(String::new()))
        );
        assert_eq!(
            Command::parse("-1", 3),
            Err(InputError::Unrecognized("-1".to_string()))
        );
        assert_eq!(
            Command::parse("2x", 3),
            Err(InputError::Unrecognized("2x".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            Command::parse("4", 3),
            Err(InputError::OutOfRange { choice: 4, max: 3 })
        );
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!Phase::Committed.is_terminal());
        assert!(Phase::Revealed.is_terminal());
        assert!(Phase::Exited.is_terminal());
    }
}
