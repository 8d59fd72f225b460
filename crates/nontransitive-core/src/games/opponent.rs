//! How the computer picks its move.

use super::moves::MoveSet;
use rand::Rng;

/// Picks the computer's move for a round.
///
/// This is a separate source from [`KeyGenerator`](crate::crypto::KeyGenerator):
/// the move is protected by the commitment, the key by its own entropy.
pub trait Opponent {
    /// Zero-based position of the chosen move; must be below `moves.len()`
    fn choose(&mut self, moves: &MoveSet) -> usize;
}

/// Uniform draw using the thread-local generator
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformOpponent;

impl Opponent for UniformOpponent {
    fn choose(&mut self, moves: &MoveSet) -> usize {
        rand::thread_rng().gen_range(0..moves.len())
    }
}
