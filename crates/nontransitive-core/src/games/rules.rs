//! Circular half-window rule engine.
//!
//! Moves are arranged in a circle in the order given. With `n` moves and
//! `h = n / 2`, a move beats the `h` moves that follow it and loses to the
//! `h` moves that precede it. Because `n` is odd, these two windows and the
//! move itself cover the circle exactly once.

use super::moves::MoveSet;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one move against another, from the first move's perspective
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }

    /// The same pairing seen from the other side
    pub fn reversed(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moves a given move beats and loses to, in circular order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matchups<'a> {
    pub beats: Vec<&'a str>,
    pub loses_to: Vec<&'a str>,
}

/// Win/lose/draw relation over a [`MoveSet`]
#[derive(Clone, Debug)]
pub struct RuleEngine {
    moves: MoveSet,
}

impl RuleEngine {
    pub fn new(moves: MoveSet) -> Self {
        Self { moves }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Moves that `name` beats and moves that beat `name`
    pub fn winners_and_losers(&self, name: &str) -> Result<Matchups<'_>, GameError> {
        let i = self.moves.index_of(name)?;
        let n = self.moves.len();
        let h = self.moves.half_window();
        let at = |j: usize| self.moves.get(j % n).unwrap_or_default();

        Ok(Matchups {
            beats: (1..=h).map(|k| at(i + k)).collect(),
            loses_to: (1..=h).rev().map(|k| at(i + n - k)).collect(),
        })
    }

    /// Outcome of `a` played against `b`, from `a`'s perspective
    pub fn resolve(&self, a: &str, b: &str) -> Result<Outcome, GameError> {
        let a = self.moves.index_of(a)?;
        let b = self.moves.index_of(b)?;
        Ok(self.resolve_index(a, b))
    }

    /// Same as [`resolve`](Self::resolve) on zero-based positions.
    ///
    /// Both positions must be below `moves().len()`.
    pub fn resolve_index(&self, a: usize, b: usize) -> Outcome {
        let n = self.moves.len();
        debug_assert!(a < n && b < n, "move index out of range");

        let distance = (b + n - a) % n;
        if distance == 0 {
            Outcome::Draw
        } else if distance <= self.moves.half_window() {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }
}
