//! Nontransitive Game CLI
//!
//! Plays one game against the computer over stdin/stdout. Diagnostics go to
//! stderr and are controlled by `RUST_LOG` (default `warn`).

use clap::Parser;
use nontransitive_core::{
    console::{self, ConsoleOptions, SessionEnd},
    games::build_table,
    GameError, GameSession, MoveSet,
};
use std::process::ExitCode;
use tokio::io::{self, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE_EXAMPLE: &str = "Example: nontransitive Rock Paper Scissors";

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a provably fair nontransitive move game against the computer")]
struct Args {
    /// Odd number (>= 3) of distinct move names, in circular order
    #[arg(value_name = "MOVE")]
    moves: Vec<String>,

    /// Print the key only after the move is made, not next to the HMAC
    #[arg(long)]
    withhold_key: bool,

    /// Print the win/lose table for the moves and exit
    #[arg(long)]
    table: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(moves: MoveSet, options: ConsoleOptions) -> Result<SessionEnd, GameError> {
    let mut session = GameSession::new(moves);
    let input = BufReader::new(io::stdin());
    let mut output = io::stdout();

    let end = console::play(&mut session, input, &mut output, options).await?;
    output.flush().await?;
    Ok(end)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let moves = match MoveSet::new(args.moves) {
        Ok(moves) => moves,
        Err(err) => {
            eprintln!(
                "Incorrect input: {err}. Please provide an odd number (>=3) of non-repeating strings as moves."
            );
            eprintln!("{USAGE_EXAMPLE}");
            return ExitCode::from(2);
        }
    };

    if args.table {
        println!("{}", build_table(&moves));
        return ExitCode::SUCCESS;
    }

    info!(moves = moves.len(), "starting session");
    let options = ConsoleOptions {
        withhold_key: args.withhold_key,
    };

    match run(moves, options).await {
        Ok(SessionEnd::Revealed(reveal)) => {
            info!(round = %reveal.round_id, outcome = %reveal.outcome, "session finished");
            ExitCode::SUCCESS
        }
        Ok(SessionEnd::Exited) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "session aborted");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
