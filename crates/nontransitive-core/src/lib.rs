//! Nontransitive Game Core Library
//!
//! A two-party move game over any odd-sized list of move names. The
//! computer commits to its move with an HMAC-SHA256 tag before the player
//! chooses, and reveals the move and key afterwards.

pub mod console;
pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{commit, KeyGenerator, SecretKey, Tag};
pub use error::{ConfigError, GameError, InputError};
pub use games::{build_table, MoveSet, Opponent, Outcome, RelationTable, RuleEngine};
pub use protocol::{Command, CommitAnnouncement, GameSession, Phase, Reveal, RoundId, Step};
