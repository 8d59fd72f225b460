//! Line-based console front end.
//!
//! Drives a [`GameSession`] over any async reader/writer pair. The commit
//! block (tag, menu, key) is written and flushed before each input line is
//! read.

use crate::error::GameError;
use crate::games::{MoveSet, Opponent, Outcome, RelationTable};
use crate::protocol::{Command, CommitAnnouncement, GameSession, Reveal, Step};
use rand::{CryptoRng, RngCore};
use std::fmt::Write as _;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

pub const PROMPT: &str = "Enter your move: ";
pub const INVALID_INPUT: &str = "Invalid input. Please try again.";
pub const GOODBYE: &str = "Goodbye!";

/// Console behavior switches
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleOptions {
    /// Leave the key out of the commit block and print it with the reveal
    pub withhold_key: bool,
}

/// How a console session ended
#[derive(Clone, Debug)]
pub enum SessionEnd {
    Revealed(Reveal),
    Exited,
}

/// Play one session to completion.
///
/// Rejected input is answered with an error line and the prompt repeats
/// with the same commitment, without limit. End of input counts as exit.
pub async fn play<O, R, I, W>(
    session: &mut GameSession<O, R>,
    input: I,
    output: &mut W,
    options: ConsoleOptions,
) -> Result<SessionEnd, GameError>
where
    O: Opponent,
    R: RngCore + CryptoRng,
    I: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    let announcement = session.start()?;
    emit(output, &commit_block(session.moves(), &announcement, options)).await?;

    loop {
        emit(output, PROMPT).await?;

        let Some(line) = lines.next_line().await? else {
            debug!("input closed");
            session.apply(Command::Exit)?;
            emit(output, &format!("\n{GOODBYE}\n")).await?;
            return Ok(SessionEnd::Exited);
        };

        let command = match session.parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                debug!(%err, "rejected input");
                emit(output, &format!("{INVALID_INPUT}\n")).await?;
                continue;
            }
        };

        match session.apply(command)? {
            Step::Help { table, next } => {
                let mut text = help_block(&table);
                text.push_str(&commit_block(session.moves(), &next, options));
                emit(output, &text).await?;
            }
            Step::Revealed(reveal) => {
                emit(output, &reveal_block(&reveal, options)).await?;
                return Ok(SessionEnd::Revealed(reveal));
            }
            Step::Exited => {
                emit(output, &format!("{GOODBYE}\n")).await?;
                return Ok(SessionEnd::Exited);
            }
        }
    }
}

/// Tag, menu and (unless withheld) key for a freshly committed round
pub fn commit_block(
    moves: &MoveSet,
    announcement: &CommitAnnouncement,
    options: ConsoleOptions,
) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "HMAC: {}", announcement.tag);
    text.push_str("Menu:\n");
    for (i, name) in moves.iter().enumerate() {
        let _ = writeln!(text, "{} - {name}", i + 1);
    }
    text.push_str("0 - Exit\n? - Help\n");
    if !options.withhold_key {
        let _ = writeln!(text, "Key: {}", announcement.key);
    }
    text
}

pub fn help_block(table: &RelationTable) -> String {
    format!("{table}\n")
}

pub fn reveal_block(reveal: &Reveal, options: ConsoleOptions) -> String {
    let verdict = match reveal.outcome {
        Outcome::Win => "You win!",
        Outcome::Lose => "You lose!",
        Outcome::Draw => "It's a draw!",
    };
    let mut text = format!(
        "Your move: {}\nComputer's move: {}\n{verdict}\n",
        reveal.player_move, reveal.computer_move
    );
    if options.withhold_key {
        let _ = writeln!(text, "Key: {}", reveal.key);
    }
    text
}

async fn emit<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<(), GameError> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{commit, SecretKey, KEY_LEN};
    use crate::protocol::RoundId;

    #[test]
    fn test_commit_block_layout() {
        let moves = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
        let key = SecretKey::from_bytes([0x22; KEY_LEN]);
        let announcement = CommitAnnouncement {
            round_id: RoundId::new(),
            round_number: 1,
            tag: commit("Rock", &key).unwrap(),
            key,
        };

        let text = commit_block(&moves, &announcement, ConsoleOptions::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], format!("HMAC: {}", announcement.tag));
        assert_eq!(
            &lines[1..7],
            &["Menu:", "1 - Rock", "2 - Paper", "3 - Scissors", "0 - Exit", "? - Help"]
        );
        assert_eq!(lines[7], format!("Key: {}", "22".repeat(KEY_LEN)));

        let withheld = commit_block(&moves, &announcement, ConsoleOptions { withhold_key: true });
        assert!(!withheld.contains("Key:"));
    }

    #[test]
    fn test_reveal_block_verdicts() {
        let key = SecretKey::from_bytes([0x33; KEY_LEN]);
        let mut reveal = Reveal {
            round_id: RoundId::new(),
            player_move: "Rock".to_string(),
            computer_move: "Paper".to_string(),
            outcome: Outcome::Win,
            tag: commit("Paper", &key).unwrap(),
            key,
        };

        let text = reveal_block(&reveal, ConsoleOptions::default());
        assert_eq!(text, "Your move: Rock\nComputer's move: Paper\nYou win!\n");

        reveal.outcome = Outcome::Draw;
        let text = reveal_block(&reveal, ConsoleOptions { withhold_key: true });
        assert!(text.contains("It's a draw!\nKey: 3333"));
    }
}
