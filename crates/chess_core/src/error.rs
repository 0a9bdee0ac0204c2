use thiserror::Error;

use crate::{Color, Move};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid square `{0}`, expected a file a-h followed by a rank 1-8")]
    InvalidSquare(String),

    #[error("invalid move `{0}`, expected two squares such as `e2e4`")]
    InvalidMoveNotation(String),

    #[error("{mv} is not a legal move for {color}")]
    IllegalMove { mv: Move, color: Color },

    #[error("the game is already over")]
    GameOver,

    #[error("there is no move to undo")]
    UndoUnavailable,

    #[error("{0} has no legal moves")]
    NoLegalMoves(Color),
}
