use std::fmt;
use std::str::FromStr;

use crate::{piece::{Color, PieceKind}, Board, ChessError, Square};

/// A proposed relocation of one piece. Not validated until checked against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    pub fn from_coords(from_x: i8, from_y: i8, to_x: i8, to_y: i8) -> Self {
        Self {
            from: Square { x: from_x, y: from_y },
            to: Square { x: to_x, y: to_y },
        }
    }

    /// The same squares travelled the other way, as used when taking a move back.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    pub fn is_null(&self) -> bool {
        self.from == self.to
    }

    fn dx(&self) -> i8 {
        self.to.x - self.from.x
    }

    fn dy(&self) -> i8 {
        self.to.y - self.from.y
    }
}

impl FromStr for Move {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.len() != 4 || !text.is_ascii() {
            return Err(ChessError::InvalidMoveNotation(s.to_string()));
        }
        let from = Square::from_algebraic(&text[..2])
            .map_err(|_| ChessError::InvalidMoveNotation(s.to_string()))?;
        let to = Square::from_algebraic(&text[2..])
            .map_err(|_| ChessError::InvalidMoveNotation(s.to_string()))?;
        Ok(Self::new(from, to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Legality of `mv` for a piece of `kind` moved by `color`.
///
/// Pure predicate: any coordinates are accepted and off-board ones are simply
/// illegal. The identity move is legal for every real piece.
pub(crate) fn is_legal(kind: PieceKind, board: &Board, color: Color, mv: Move) -> bool {
    if kind == PieceKind::Empty {
        return false;
    }
    if mv.is_null() {
        return true;
    }
    if !first_check(board, color, mv) {
        return false;
    }

    match kind {
        PieceKind::Empty => false,
        PieceKind::Pawn => is_valid_pawn_move(board, color, mv),
        PieceKind::Knight => is_valid_knight_move(mv),
        PieceKind::Bishop => is_diagonal(mv) && is_path_clear(board, mv),
        PieceKind::Rook => is_straight(mv) && is_path_clear(board, mv),
        PieceKind::Queen => (is_straight(mv) || is_diagonal(mv)) && is_path_clear(board, mv),
        PieceKind::King => is_valid_king_move(mv),
    }
}

// Checks shared by every kind: both squares on the board, the mover owns the
// source square and is not capturing its own piece.
fn first_check(board: &Board, color: Color, mv: Move) -> bool {
    if !mv.from.on_board() || !mv.to.on_board() {
        return false;
    }
    if !board.piece_at(mv.from).belongs_to(color) {
        return false;
    }
    !board.piece_at(mv.to).belongs_to(color)
}

/// Exactly one axis changes.
pub fn is_straight(mv: Move) -> bool {
    (mv.dx() != 0) != (mv.dy() != 0)
}

pub fn is_diagonal(mv: Move) -> bool {
    mv.dx() != 0 && mv.dx().abs() == mv.dy().abs()
}

/// Walks the squares strictly between the endpoints of a straight or diagonal
/// move and reports whether all of them are empty.
pub fn is_path_clear(board: &Board, mv: Move) -> bool {
    debug_assert!(is_straight(mv) || is_diagonal(mv));

    let step_x = mv.dx().signum();
    let step_y = mv.dy().signum();

    let mut x = mv.from.x + step_x;
    let mut y = mv.from.y + step_y;
    while x != mv.to.x || y != mv.to.y {
        if !board.get(x, y).is_empty() {
            return false;
        }
        x += step_x;
        y += step_y;
    }

    true
}

fn is_valid_king_move(mv: Move) -> bool {
    mv.dx().abs() <= 1 && mv.dy().abs() <= 1
}

fn is_valid_knight_move(mv: Move) -> bool {
    let file_diff = mv.dx().abs();
    let rank_diff = mv.dy().abs();

    (file_diff == 2 && rank_diff == 1) || (file_diff == 1 && rank_diff == 2)
}

fn is_valid_pawn_move(board: &Board, color: Color, mv: Move) -> bool {
    let rank_diff = mv.dy();
    let file_diff = mv.dx();

    // Only forward, never sideways along the rank
    if rank_diff.signum() != color.forward() {
        return false;
    }

    match rank_diff.abs() {
        1 => {}
        2 if mv.from.y == color.pawn_start_row() => {}
        _ => return false,
    }

    let target = board.piece_at(mv.to);
    if file_diff != 0 {
        // Captures go one square diagonally onto an occupied square
        return file_diff.abs() == 1 && rank_diff.abs() == 1 && !target.is_empty();
    }

    target.is_empty()
}
