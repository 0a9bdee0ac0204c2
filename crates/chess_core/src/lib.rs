// Core chess rules: board, pieces, move legality and history
pub mod board;
pub mod error;
pub mod history;
pub mod moves;
pub mod piece;
pub mod position;

// Re-export main types for convenience
pub use board::{Board, Setup};
pub use error::ChessError;
pub use history::{History, MoveInfo};
pub use moves::Move;
pub use piece::{Color, Piece, PieceKind};
pub use position::Square;
