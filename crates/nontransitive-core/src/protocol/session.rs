//! Round state machine.
//!
//! ```text
//! Initialized --start--> Committed --Play--> Revealed
//!                          |   ^  \--Exit--> Exited
//!                          \Help/
//! ```
//!
//! Entering `Committed` draws the computer's move, a fresh key and the tag,
//! all before any input is read. Help restarts the round: the in-flight
//! commitment is dropped and a new one is drawn.

use super::messages::{CommitAnnouncement, Reveal, Step};
use super::types::{Command, Phase, RoundId};
use crate::crypto::{commit, KeyGenerator, SecretKey, Tag};
use crate::error::{GameError, InputError};
use crate::games::{MoveSet, Opponent, RelationTable, RuleEngine, UniformOpponent};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, info};

/// State owned by one committed round. Dropping it zeroes the key.
struct Round {
    id: RoundId,
    computer_move: usize,
    key: SecretKey,
    tag: Tag,
}

enum State {
    Initialized,
    Committed(Round),
    Revealed,
    Exited,
}

impl State {
    fn phase(&self) -> Phase {
        match self {
            State::Initialized => Phase::Initialized,
            State::Committed(_) => Phase::Committed,
            State::Revealed => Phase::Revealed,
            State::Exited => Phase::Exited,
        }
    }
}

/// One game between the player and the computer
pub struct GameSession<O = UniformOpponent, R = OsRng> {
    rules: RuleEngine,
    opponent: O,
    keys: KeyGenerator<R>,
    state: State,
    rounds: u32,
}

impl GameSession {
    /// Session with a uniform opponent and OS-backed keys
    pub fn new(moves: MoveSet) -> Self {
        Self::with_parts(moves, UniformOpponent, KeyGenerator::new())
    }
}

impl<O: Opponent, R: RngCore + CryptoRng> GameSession<O, R> {
    pub fn with_parts(moves: MoveSet, opponent: O, keys: KeyGenerator<R>) -> Self {
        Self {
            rules: RuleEngine::new(moves),
            opponent,
            keys,
            state: State::Initialized,
            rounds: 0,
        }
    }

    pub fn moves(&self) -> &MoveSet {
        self.rules.moves()
    }

    pub fn rules(&self) -> &RuleEngine {
        &self.rules
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Number of rounds committed so far, including ones restarted by help
    pub fn rounds_started(&self) -> u32 {
        self.rounds
    }

    /// Commit the first round
    pub fn start(&mut self) -> Result<CommitAnnouncement, GameError> {
        if !matches!(self.state, State::Initialized) {
            return Err(GameError::InvalidState {
                expected: Phase::Initialized.as_str(),
                found: self.phase().as_str(),
            });
        }
        self.enter_committed()
    }

    /// Interpret a raw input line. Rejected input leaves the session as is.
    pub fn parse_command(&self, raw: &str) -> Result<Command, InputError> {
        Command::parse(raw, self.moves().len())
    }

    /// Apply a command to the committed round
    pub fn apply(&mut self, command: Command) -> Result<Step, GameError> {
        let round = match std::mem::replace(&mut self.state, State::Exited) {
            State::Committed(round) => round,
            other => {
                let found = other.phase().as_str();
                self.state = other;
                return Err(GameError::InvalidState {
                    expected: Phase::Committed.as_str(),
                    found,
                });
            }
        };

        match command {
            Command::Exit => {
                info!(round = %round.id, "player exited");
                Ok(Step::Exited)
            }
            Command::Help => {
                debug!(round = %round.id, "help requested, restarting round");
                drop(round);
                let table = RelationTable::build(&self.rules);
                let next = self.enter_committed()?;
                Ok(Step::Help { table, next })
            }
            Command::Play(index) => {
                let Some(player_move) = self.moves().get(index).map(str::to_string) else {
                    self.state = State::Committed(round);
                    return Err(GameError::UnknownMove(format!("menu position {}", index + 1)));
                };
                let computer_move = self
                    .moves()
                    .get(round.computer_move)
                    .map(str::to_string)
                    .ok_or_else(|| GameError::UnknownMove(format!("index {}", round.computer_move)))?;
                let outcome = self.rules.resolve_index(index, round.computer_move);

                info!(
                    round = %round.id,
                    player = %player_move,
                    computer = %computer_move,
                    %outcome,
                    "round revealed"
                );
                self.state = State::Revealed;
                Ok(Step::Revealed(Reveal {
                    round_id: round.id,
                    player_move,
                    computer_move,
                    outcome,
                    tag: round.tag,
                    key: round.key.clone(),
                }))
            }
        }
    }

    /// Entry action of `Committed`. On failure the session is left `Exited`.
    fn enter_committed(&mut self) -> Result<CommitAnnouncement, GameError> {
        self.state = State::Exited;

        let computer_move = self.opponent.choose(self.rules.moves());
        let name = self
            .rules
            .moves()
            .get(computer_move)
            .ok_or_else(|| GameError::UnknownMove(format!("index {computer_move}")))?;
        let key = self.keys.generate()?;
        let tag = commit(name, &key)?;

        let id = RoundId::new();
        self.rounds += 1;
        // Only the tag is logged; move and key stay private until reveal
        info!(round = %id, number = self.rounds, %tag, "round committed");

        let announcement = CommitAnnouncement {
            round_id: id,
            round_number: self.rounds,
            tag,
            key: key.clone(),
        };
        self.state = State::Committed(Round {
            id,
            computer_move,
            key,
            tag,
        });
        Ok(announcement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::Outcome;

    /// Always plays the same menu position
    struct Fixed(usize);

    impl Opponent for Fixed {
        fn choose(&mut self, _moves: &MoveSet) -> usize {
            self.0
        }
    }

    fn rps(computer: usize) -> GameSession<Fixed> {
        let moves = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
        GameSession::with_parts(moves, Fixed(computer), KeyGenerator::new())
    }

    #[test]
    fn test_start_commits_before_any_move() {
        let mut session = rps(1);
        assert_eq!(session.phase(), Phase::Initialized);

        let announcement = session.start().unwrap();
        assert_eq!(session.phase(), Phase::Committed);
        assert_eq!(announcement.round_number, 1);
        assert!(announcement.tag.verify("Paper", &announcement.key));
    }

    #[test]
    fn test_play_reveals_committed_move() {
        let mut session = rps(2);
        let announcement = session.start().unwrap();

        let Step::Revealed(reveal) = session.apply(Command::Play(0)).unwrap() else {
            panic!("expected a reveal");
        };
        assert_eq!(reveal.player_move, "Rock");
        assert_eq!(reveal.computer_move, "Scissors");
        assert_eq!(reveal.outcome, Outcome::Lose);
        assert_eq!(reveal.tag, announcement.tag);
        assert_eq!(reveal.key, announcement.key);
        assert!(reveal.verifies());
        assert_eq!(session.phase(), Phase::Revealed);
    }

    #[test]
    fn test_same_move_is_a_draw() {
        let mut session = rps(0);
        session.start().unwrap();
        let Step::Revealed(reveal) = session.apply(Command::Play(0)).unwrap() else {
            panic!("expected a reveal");
        };
        assert_eq!(reveal.outcome, Outcome::Draw);
    }

    #[test]
    fn test_help_restarts_round_with_fresh_key() {
        let mut session = rps(0);
        let first = session.start().unwrap();

        let Step::Help { table, next } = session.apply(Command::Help).unwrap() else {
            panic!("expected help");
        };
        assert_eq!(table.rows.len(), 3);
        assert_eq!(next.round_number, 2);
        assert_ne!(next.round_id, first.round_id);
        assert_ne!(next.key, first.key);
        assert_ne!(next.tag, first.tag);
        assert_eq!(session.phase(), Phase::Committed);
        assert_eq!(session.rounds_started(), 2);

        let Step::Revealed(reveal) = session.apply(Command::Play(1)).unwrap() else {
            panic!("expected a reveal");
        };
        assert_eq!(reveal.tag, next.tag);
        assert_eq!(reveal.outcome, Outcome::Lose);
    }

    #[test]
    fn test_exit_is_terminal() {
        let mut session = rps(0);
        session.start().unwrap();

        assert!(matches!(session.apply(Command::Exit).unwrap(), Step::Exited));
        assert_eq!(session.phase(), Phase::Exited);
        assert!(matches!(
            session.apply(Command::Play(0)),
            Err(GameError::InvalidState { found: "exited", .. })
        ));
    }

    #[test]
    fn test_apply_before_start_is_rejected() {
        let mut session = rps(0);
        assert!(matches!(
            session.apply(Command::Help),
            Err(GameError::InvalidState { found: "initialized", .. })
        ));
        assert_eq!(session.phase(), Phase::Initialized);
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let mut session = rps(0);
        session.start().unwrap();
        assert!(session.start().is_err());
        assert_eq!(session.rounds_started(), 1);
    }

    #[test]
    fn test_rejected_input_keeps_commitment() {
        let mut session = rps(0);
        let announcement = session.start().unwrap();

        assert!(session.parse_command("foo").is_err());
        assert!(session.parse_command("5").is_err());
        assert_eq!(session.phase(), Phase::Committed);
        assert_eq!(session.rounds_started(), 1);

        let command = session.parse_command("2").unwrap();
        let Step::Revealed(reveal) = session.apply(command).unwrap() else {
            panic!("expected a reveal");
        };
        assert_eq!(reveal.tag, announcement.tag);
    }

    #[test]
    fn test_opponent_out_of_range_is_an_error() {
        let mut session = rps(7);
        assert!(matches!(session.start(), Err(GameError::UnknownMove(_))));
        assert_eq!(session.phase(), Phase::Exited);
    }
}
