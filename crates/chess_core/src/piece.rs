use std::fmt;

use crate::{moves, Board, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }

    /// Row a pawn of this color starts on and may double-step from.
    pub fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row delta of a single pawn step. White moves up the board (towards row 0).
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Empty,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Empty => "empty",
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// The occupant of one board cell. Empty cells hold a colorless `Empty` piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Option<Color>,
}

impl Piece {
    pub const EMPTY: Piece = Piece {
        kind: PieceKind::Empty,
        color: None,
    };

    /// Builds a colored piece. `PieceKind::Empty` always yields the colorless empty piece.
    pub fn new(kind: PieceKind, color: Color) -> Self {
        match kind {
            PieceKind::Empty => Self::EMPTY,
            _ => Self {
                kind,
                color: Some(color),
            },
        }
    }

    pub fn empty() -> Self {
        Self::EMPTY
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn is_empty(&self) -> bool {
        self.kind == PieceKind::Empty
    }

    pub fn belongs_to(&self, color: Color) -> bool {
        self.color == Some(color)
    }

    /// `{color}_{kind}` such as `white_pawn`, or an empty string for an empty cell.
    ///
    /// Renderers key piece images on this string and a captured piece whose
    /// label ends in `_king` ends the game, so the format must not change.
    pub fn label(&self) -> String {
        match self.color {
            Some(color) => format!("{}_{}", color.name(), self.kind.name()),
            None => String::new(),
        }
    }

    /// Whether this piece, standing on `mv.from`, may make `mv` for `color`.
    pub fn is_legal(&self, board: &Board, color: Color, mv: Move) -> bool {
        moves::is_legal(self.kind, board, color, mv)
    }
}

impl Default for Piece {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
