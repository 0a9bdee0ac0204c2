use chess_core::{ChessError, Move, Setup};
use chess_engine::{Game, GameConfig, PlayerMode, Status};
use clap::{Parser, ValueEnum};
use log::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SetupArg {
    Full,
    BackRanks,
}

impl From<SetupArg> for Setup {
    fn from(arg: SetupArg) -> Self {
        match arg {
            SetupArg::Full => Setup::Full,
            SetupArg::BackRanks => Setup::BackRanks,
        }
    }
}

/// Headless two-ply chess: plays an optional scripted opening, then lets the
/// AI play both sides.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Starting layout
    #[arg(long, value_enum, default_value_t = SetupArg::Full)]
    setup: SetupArg,

    /// Stop after this many plies in total
    #[arg(long, default_value_t = 200)]
    max_turns: usize,

    /// Search root moves on all cores
    #[arg(long)]
    parallel: bool,

    /// Opening moves to play first, e.g. "e2e4 e7e5"
    #[arg(long, default_value = "")]
    moves: String,
}

fn main() -> Result<(), ChessError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut game = Game::new(GameConfig {
        setup: args.setup.into(),
        mode: PlayerMode::TwoPlayers,
        allow_undo: true,
        parallel_search: args.parallel,
    });

    let scripted = args
        .moves
        .split_whitespace()
        .map(str::parse::<Move>)
        .collect::<Result<Vec<_>, _>>()?;

    let mut plies = 0;
    for mv in scripted {
        game.play(mv)?;
        plies += 1;
    }

    while plies < args.max_turns && !game.status().is_over() {
        match game.play_ai_turn() {
            Ok(_) => plies += 1,
            Err(ChessError::NoLegalMoves(_)) => break,
            Err(err) => return Err(err),
        }
    }

    match game.status() {
        Status::InProgress => info!("stopped after {} plies, {} to move", plies, game.current_player()),
        Status::KingCaptured { winner } => info!("{} wins after {} plies", winner, plies),
        Status::NoMoves(color) => info!("{} cannot move after {} plies", color, plies),
    }
    Ok(())
}
