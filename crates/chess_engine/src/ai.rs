use chess_core::{Board, Color, Move};
use log::{debug, warn};

use crate::search::{search_best_move, search_best_move_parallel};

/// Entry point for an AI turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveSelector {
    parallel: bool,
}

impl MoveSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spreads the root moves over the rayon thread pool. The chosen move is
    /// the same as with the sequential scan.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Picks a move for `color`, or `None` when it has nothing to play.
    /// `board` is left exactly as it was passed in.
    pub fn best_move(&self, board: &mut Board, color: Color) -> Option<Move> {
        let chosen = if self.parallel {
            search_best_move_parallel(board, color)
        } else {
            search_best_move(board, color)
        };

        match chosen {
            Some(mv) => {
                // The scan only ever returns enumerated moves
                debug_assert!(board.piece_at(mv.from).is_legal(board, color, mv));
                debug!("{} chooses {}", color, mv);
            }
            None => warn!("{} has no move to choose", color),
        }
        chosen
    }
}
