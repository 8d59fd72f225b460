//! Move sets, rules, and the computer opponent.

mod moves;
mod opponent;
mod rules;
mod table;

pub use moves::{MoveSet, MIN_MOVES};
pub use opponent::{Opponent, UniformOpponent};
pub use rules::{Matchups, Outcome, RuleEngine};
pub use table::{build_table, RelationRow, RelationTable};
