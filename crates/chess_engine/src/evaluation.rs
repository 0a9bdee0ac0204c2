use chess_core::{Board, Color, Piece, PieceKind, Square};

// Material values. The king is effectively priceless so losing it dominates
// every other term.
const PAWN_VALUE: i32 = 100;
const KNIGHT_VALUE: i32 = 300;
const BISHOP_VALUE: i32 = 300;
const ROOK_VALUE: i32 = 300;
const QUEEN_VALUE: i32 = 900;
const KING_VALUE: i32 = 100_000;

// Centralization bonus per coordinate, indexed by x or y. Applied to every
// piece except pawns.
const CENTRE_BONUS: [i32; 8] = [0, 4, 8, 12, 12, 8, 4, 0];

// Pawns on the a and h files cannot be captured from one side.
const PAWN_EDGE_BONUS: i32 = 5;

/// Static score of `board` from `perspective`'s point of view.
///
/// Sums material plus positional bonus over every piece, adding own pieces and
/// subtracting the opponent's. The terms mirror exactly between colors, so a
/// symmetric position scores zero and swapping perspective negates the score.
pub fn evaluate_position(board: &Board, perspective: Color) -> i32 {
    board
        .pieces()
        .map(|(square, piece)| {
            let value = get_piece_value(piece.kind()) + get_position_bonus(piece, square);
            if piece.belongs_to(perspective) {
                value
            } else {
                -value
            }
        })
        .sum()
}

/// Returns the base material value of a piece
pub fn get_piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Empty => 0,
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

fn get_position_bonus(piece: Piece, square: Square) -> i32 {
    match (piece.kind(), piece.color()) {
        (PieceKind::Empty, _) | (_, None) => 0,
        (PieceKind::Pawn, Some(color)) => pawn_file_bonus(square.x) + pawn_advance_bonus(color, square.y),
        _ => CENTRE_BONUS[square.x as usize] + CENTRE_BONUS[square.y as usize],
    }
}

fn pawn_file_bonus(x: i8) -> i32 {
    if x == 0 || x == 7 {
        PAWN_EDGE_BONUS
    } else {
        0
    }
}

// Rewards distance travelled from the start row. Rows just past the middle
// are flattened to 1 for both colors.
fn pawn_advance_bonus(color: Color, y: i8) -> i32 {
    let y = y as i32;
    match color {
        Color::White if y == 2 || y == 3 => 1,
        Color::White => y - 2,
        Color::Black if y == 5 || y == 6 => 1,
        Color::Black => 5 - y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Setup;

    fn place(board: &mut Board, x: i8, y: i8, kind: PieceKind, color: Color) {
        board.set(x, y, Piece::new(kind, color));
    }

    #[test]
    fn starting_positions_score_zero() {
        assert_eq!(evaluate_position(&Board::new(), Color::White), 0);
        assert_eq!(evaluate_position(&Board::new(), Color::Black), 0);
        assert_eq!(evaluate_position(&Board::with_setup(Setup::BackRanks), Color::White), 0);
    }

    #[test]
    fn empty_board_scores_zero() {
        assert_eq!(evaluate_position(&Board::empty(), Color::White), 0);
    }

    #[test]
    fn central_knight_outscores_corner_knight() {
        let mut board = Board::empty();
        place(&mut board, 3, 4, PieceKind::Knight, Color::White);
        assert_eq!(evaluate_position(&board, Color::White), 300 + 12 + 12);

        let mut corner = Board::empty();
        place(&mut corner, 0, 0, PieceKind::Knight, Color::White);
        assert_eq!(evaluate_position(&corner, Color::White), 300);
    }

    #[test]
    fn pawn_positional_terms() {
        let mut board = Board::empty();
        // White a-pawn on its start row: edge 5, advance 6 - 2 = 4
        place(&mut board, 0, 6, PieceKind::Pawn, Color::White);
        assert_eq!(evaluate_position(&board, Color::White), 100 + 5 + 4);

        let mut board = Board::empty();
        // White pawn in the middle flattened to 1
        place(&mut board, 4, 3, PieceKind::Pawn, Color::White);
        assert_eq!(evaluate_position(&board, Color::White), 101);

        let mut board = Board::empty();
        // Black pawn deep in White's half: 5 - 7 = -2
        place(&mut board, 2, 7, PieceKind::Pawn, Color::Black);
        assert_eq!(evaluate_position(&board, Color::Black), 98);
    }

    #[test]
    fn perspective_swap_negates_score() {
        let mut board = Board::new();
        let _ = board.apply_move("d1d7".parse().unwrap());
        let white = evaluate_position(&board, Color::White);
        assert!(white > 0);
        assert_eq!(evaluate_position(&board, Color::Black), -white);
    }
}
