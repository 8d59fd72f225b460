//! Round protocol: commit, then accept a move, then reveal.

mod messages;
mod session;
mod types;

pub use messages::{CommitAnnouncement, Reveal, Step};
pub use session::GameSession;
pub use types::{Command, Phase, RoundId};
