//! Messages crossing the console boundary.

use crate::crypto::{SecretKey, Tag};
use crate::games::{Outcome, RelationTable};
use crate::protocol::RoundId;
use serde::Serialize;

/// Published at the start of every round, before any move is accepted
#[derive(Clone, Debug, Serialize)]
pub struct CommitAnnouncement {
    pub round_id: RoundId,
    /// 1-based count of rounds started in this session
    pub round_number: u32,
    pub tag: Tag,
    /// The round key. The console prints it next to the tag unless told to
    /// withhold it until the reveal.
    pub key: SecretKey,
}

/// Everything needed to check the commitment after the player moves
#[derive(Clone, Debug, Serialize)]
pub struct Reveal {
    pub round_id: RoundId,
    pub player_move: String,
    pub computer_move: String,
    /// From the player's perspective
    pub outcome: Outcome,
    pub tag: Tag,
    pub key: SecretKey,
}

impl Reveal {
    /// Recompute the tag from the revealed move and key
    pub fn verifies(&self) -> bool {
        self.tag.verify(&self.computer_move, &self.key)
    }
}

/// Result of applying a command to a committed session
#[derive(Clone, Debug)]
pub enum Step {
    /// Help was shown and a fresh round was committed
    Help {
        table: RelationTable,
        next: CommitAnnouncement,
    },
    /// The round is over
    Revealed(Reveal),
    /// The player left
    Exited,
}
