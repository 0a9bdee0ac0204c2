use chess_core::{Board, Color, Move};
use log::debug;
use rayon::prelude::*;

use crate::evaluation::evaluate_position;

// Starting best score. Any real evaluation is far above it.
const SCORE_SENTINEL: i32 = -1_000_000_000;

/// Two-ply scan from `color`'s point of view.
///
/// Every move of `color` is tried, and under it every reply of the opponent;
/// the position after the reply is scored for `color`. The root move that was
/// active when the single highest score of the whole scan was seen wins, and
/// on equal scores the earliest root move in enumeration order is kept.
///
/// Opponent replies are not minimized: the best reply *for us* decides. A root
/// move after which the opponent has no reply is never scored.
///
/// The board is mutated in place while searching and restored before
/// returning. Returns `None` when no position was scored, which includes
/// `color` having no legal moves.
pub fn search_best_move(board: &mut Board, color: Color) -> Option<Move> {
    let mut best_move = None;
    let mut best_score = SCORE_SENTINEL;
    let mut positions = 0usize;

    for mv in board.legal_moves(color) {
        let captured = board.apply_move(mv);

        if let Some(score) = best_reply_score(board, color, &mut positions) {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        board.undo_move(mv, captured);
    }

    debug!(
        "two-ply scan for {}: {} positions scored, best {:?} at {}",
        color,
        positions,
        best_move.map(|mv| mv.to_string()),
        best_score
    );
    best_move
}

/// Same result as [`search_best_move`], with root moves spread across the rayon
/// pool. Each worker searches its own copy of the board.
pub fn search_best_move_parallel(board: &Board, color: Color) -> Option<Move> {
    let root_moves = board.legal_moves(color);

    let scored: Vec<(Move, Option<i32>, usize)> = root_moves
        .into_par_iter()
        .map(|mv| {
            let mut local = board.clone();
            let mut positions = 0usize;
            let _ = local.apply_move(mv);
            let score = best_reply_score(&mut local, color, &mut positions);
            (mv, score, positions)
        })
        .collect();

    // Fold in enumeration order so ties resolve exactly like the sequential scan
    let mut best_move = None;
    let mut best_score = SCORE_SENTINEL;
    let mut positions = 0usize;
    for (mv, score, count) in scored {
        positions += count;
        if let Some(score) = score {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }
    }

    debug!(
        "parallel two-ply scan for {}: {} positions scored, best {:?} at {}",
        color,
        positions,
        best_move.map(|mv| mv.to_string()),
        best_score
    );
    best_move
}

// Highest score for `color` over every opponent reply on the current board,
// or `None` when the opponent cannot move. Leaves the board as it found it.
fn best_reply_score(board: &mut Board, color: Color, positions: &mut usize) -> Option<i32> {
    let mut best = None;

    for reply in board.legal_moves(color.opposite()) {
        let captured = board.apply_move(reply);
        let score = evaluate_position(board, color);
        *positions += 1;
        board.undo_move(reply, captured);

        if best.map_or(true, |current| score > current) {
            best = Some(score);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Piece, PieceKind, Setup};

    fn place(board: &mut Board, at: &str, kind: PieceKind, color: Color) {
        let square = chess_core::Square::from_algebraic(at).unwrap();
        board.set(square.x, square.y, Piece::new(kind, color));
    }

    /// Straight transcription of the nested scan, used to pin down semantics.
    fn reference_scan(board: &mut Board, color: Color) -> Option<Move> {
        let mut min = SCORE_SENTINEL;
        let mut best = None;
        for m1 in board.legal_moves(color) {
            let c1 = board.apply_move(m1);
            for m2 in board.legal_moves(color.opposite()) {
                let c2 = board.apply_move(m2);
                let score = evaluate_position(board, color);
                if score > min {
                    min = score;
                    best = Some(m1);
                }
                board.undo_move(m2, c2);
            }
            board.undo_move(m1, c1);
        }
        best
    }

    #[test]
    fn no_moves_means_no_result() {
        let mut board = Board::empty();
        place(&mut board, "e8", PieceKind::King, Color::Black);
        assert_eq!(search_best_move(&mut board, Color::White), None);
        assert_eq!(search_best_move_parallel(&board, Color::White), None);
    }

    #[test]
    fn board_is_restored_after_search() {
        let mut board = Board::new();
        let before = board.clone();
        assert!(search_best_move(&mut board, Color::White).is_some());
        assert_eq!(board, before);
    }

    #[test]
    fn takes_a_hanging_queen() {
        let mut board = Board::empty();
        place(&mut board, "a1", PieceKind::King, Color::White);
        place(&mut board, "d1", PieceKind::Rook, Color::White);
        place(&mut board, "d5", PieceKind::Queen, Color::Black);
        place(&mut board, "h8", PieceKind::King, Color::Black);

        let best = search_best_move(&mut board, Color::White).unwrap();
        assert_eq!(best, "d1d5".parse().unwrap());
    }

    #[test]
    fn matches_reference_scan_from_the_start() {
        for setup in [Setup::Full, Setup::BackRanks] {
            for color in [Color::White, Color::Black] {
                let mut board = Board::with_setup(setup);
                let expected = reference_scan(&mut board, color);
                assert_eq!(search_best_move(&mut board, color), expected);
                assert_eq!(search_best_move_parallel(&board, color), expected);
            }
        }
    }

    #[test]
    fn root_move_without_replies_is_never_chosen() {
        // Capturing the lone black king leaves Black with nothing to move, so
        // that root move is never scored and a quiet king step wins instead.
        let mut board = Board::empty();
        place(&mut board, "a1", PieceKind::King, Color::White);
        place(&mut board, "a2", PieceKind::King, Color::Black);

        let best = search_best_move(&mut board, Color::White).unwrap();
        assert_ne!(best, "a1a2".parse().unwrap());
        assert_eq!(best, reference_scan(&mut board, Color::White).unwrap());
    }
}
