use std::fmt;

use crate::error::ChessError;

/// One of the 64 board squares. `y = 0` is Black's back rank, `y = 7` is White's.
///
/// Coordinates are signed so a proposed move can point off the board; such a
/// square is representable but never legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub x: i8, // file a-h (0-7)
    pub y: i8, // rank 8-1 (0-7)
}

impl Square {
    pub fn new(x: i8, y: i8) -> Option<Self> {
        let square = Self { x, y };
        if square.on_board() {
            Some(square)
        } else {
            None
        }
    }

    pub fn on_board(self) -> bool {
        (0..8).contains(&self.x) && (0..8).contains(&self.y)
    }

    /// Linear index `y * 8 + x`. Only meaningful for on-board squares.
    pub fn index(self) -> usize {
        debug_assert!(self.on_board(), "square {:?} is off the board", self);
        self.y as usize * 8 + self.x as usize
    }

    pub fn from_index(index: usize) -> Self {
        assert!(index < 64, "square index {} is off the board", index);
        Self {
            x: (index % 8) as i8,
            y: (index / 8) as i8,
        }
    }

    pub fn from_algebraic(notation: &str) -> Result<Self, ChessError> {
        let bytes = notation.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquare(notation.to_string()));
        }

        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidSquare(notation.to_string()));
        }

        Ok(Self {
            x: (file - b'a') as i8,
            y: (b'8' - rank) as i8,
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.on_board() {
            write!(f, "{}{}", (b'a' + self.x as u8) as char, 8 - self.y)
        } else {
            write!(f, "({},{})", self.x, self.y)
        }
    }
}
