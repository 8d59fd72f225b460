//! The ordered set of move names.

use crate::error::{ConfigError, GameError};
use serde::Serialize;
use std::collections::HashSet;

/// Minimum number of moves in a game
pub const MIN_MOVES: usize = 3;

/// Ordered, duplicate-free list of move names with odd length >= 3
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Validate and build a move set
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() < MIN_MOVES {
            return Err(ConfigError::TooFewMoves(names.len()));
        }
        if names.len() % 2 == 0 {
            return Err(ConfigError::EvenMoveCount(names.len()));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if name.is_empty() {
                return Err(ConfigError::EmptyMoveName);
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateMove(name.clone()));
            }
        }

        Ok(Self(names))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Move at a zero-based position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Zero-based position of a move
    pub fn index_of(&self, name: &str) -> Result<usize, GameError> {
        self.0
            .iter()
            .position(|m| m == name)
            .ok_or_else(|| GameError::UnknownMove(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Half-window size: how many moves each move beats (and loses to)
    pub fn half_window(&self) -> usize {
        self.0.len() / 2
    }
}
