use log::debug;

use crate::{Board, Move, Piece};

/// A played move together with what it captured, enough to take it back exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveInfo {
    pub mv: Move,
    pub captured: Piece,
}

/// Stack of played moves, most recent last.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<MoveInfo>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, mv: Move, captured: Piece) {
        self.entries.push(MoveInfo { mv, captured });
    }

    /// Pops the last move and reverts it on `board`. Returns `None` when there
    /// is nothing left to undo.
    pub fn undo_last(&mut self, board: &mut Board) -> Option<MoveInfo> {
        let info = self.entries.pop()?;
        board.undo_move(info.mv, info.captured);
        debug!("undid {} (restored `{}`)", info.mv, info.captured);
        Some(info)
    }

    pub fn last(&self) -> Option<&MoveInfo> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveInfo> {
        self.entries.iter()
    }
}
