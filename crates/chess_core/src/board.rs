use crate::{Color, Move, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Which starting layout a new board is populated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Setup {
    /// Both back ranks and a full row of eight pawns per side.
    #[default]
    Full,
    /// Only the two back ranks, no pawns.
    BackRanks,
}

/// 8x8 board stored as 64 cells indexed by `y * 8 + x`.
///
/// Row 0 is Black's back rank and row 7 is White's. Every cell always holds a
/// piece value, empty cells included. Coordinates outside `[0, 7]` passed to
/// the accessors below are a caller bug and panic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Piece; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position with full pawn rows.
    pub fn new() -> Self {
        Self::with_setup(Setup::Full)
    }

    pub fn empty() -> Self {
        Self {
            cells: [Piece::EMPTY; 64],
        }
    }

    pub fn with_setup(setup: Setup) -> Self {
        let mut board = Self::empty();
        board.setup_initial_position(setup);
        board
    }

    /// Clears the board and lays out the starting position for `setup`.
    pub fn setup_initial_position(&mut self, setup: Setup) {
        self.cells = [Piece::EMPTY; 64];

        for (x, &kind) in BACK_RANK.iter().enumerate() {
            let x = x as i8;
            self.set(x, 0, Piece::new(kind, Color::Black));
            self.set(x, 7, Piece::new(kind, Color::White));
        }

        if setup == Setup::Full {
            for x in 0..8 {
                self.set(x, Color::Black.pawn_start_row(), Piece::new(PieceKind::Pawn, Color::Black));
                self.set(x, Color::White.pawn_start_row(), Piece::new(PieceKind::Pawn, Color::White));
            }
        }
    }

    fn index(x: i8, y: i8) -> usize {
        assert!(
            (0..8).contains(&x) && (0..8).contains(&y),
            "square ({}, {}) is off the board",
            x,
            y
        );
        y as usize * 8 + x as usize
    }

    pub fn get(&self, x: i8, y: i8) -> Piece {
        self.cells[Self::index(x, y)]
    }

    pub fn set(&mut self, x: i8, y: i8, piece: Piece) {
        self.cells[Self::index(x, y)] = piece;
    }

    pub fn piece_at(&self, square: Square) -> Piece {
        self.get(square.x, square.y)
    }

    /// Moves the piece on `mv.from` onto `mv.to` without any legality check and
    /// returns whatever stood on `mv.to` before. Keep the return value: it is
    /// the only way to take the move back with [`Board::undo_move`].
    #[must_use = "the captured piece is needed to undo the move"]
    pub fn apply_move(&mut self, mv: Move) -> Piece {
        let from = Self::index(mv.from.x, mv.from.y);
        let to = Self::index(mv.to.x, mv.to.y);

        let captured = self.cells[to];
        self.cells[to] = self.cells[from];
        self.cells[from] = Piece::EMPTY;
        captured
    }

    /// Reverses `mv`, putting `captured` back on `mv.to`. `captured` must be the
    /// exact value [`Board::apply_move`] returned for this move.
    pub fn undo_move(&mut self, mv: Move, captured: Piece) {
        let from = Self::index(mv.from.x, mv.from.y);
        let to = Self::index(mv.to.x, mv.to.y);

        self.cells[from] = self.cells[to];
        self.cells[to] = captured;
    }

    /// Every legal move for `color`, ordered by source index and then by
    /// destination index, both ascending.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();

        for (from_index, piece) in self.cells.iter().enumerate() {
            if !piece.belongs_to(color) {
                continue;
            }
            let from = Square::from_index(from_index);
            for to_index in (0..64).filter(|&i| i != from_index) {
                let mv = Move::new(from, Square::from_index(to_index));
                if piece.is_legal(self, color, mv) {
                    moves.push(mv);
                }
            }
        }

        moves
    }

    /// Occupied squares with their pieces, in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, piece)| !piece.is_empty())
            .map(|(index, piece)| (Square::from_index(index), *piece))
    }

    pub fn has_king(&self, color: Color) -> bool {
        self.cells
            .iter()
            .any(|piece| piece.kind() == PieceKind::King && piece.belongs_to(color))
    }
}
