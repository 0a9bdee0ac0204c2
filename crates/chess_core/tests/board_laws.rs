use chess_core::{Board, Color, Move, Piece, PieceKind, Setup, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn random_square(rng: &mut StdRng) -> Square {
    Square::new(rng.gen_range(0..8), rng.gen_range(0..8)).unwrap()
}

/// Plays `plies` random legal moves from the starting position.
fn random_position(rng: &mut StdRng, plies: usize) -> Board {
    let mut board = Board::new();
    let mut color = Color::White;
    for _ in 0..plies {
        let moves = board.legal_moves(color);
        let Some(&mv) = moves.choose(rng) else {
            break;
        };
        let _ = board.apply_move(mv);
        color = color.opposite();
    }
    board
}

#[test]
fn apply_then_undo_restores_any_position() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for round in 0..200 {
        let mut board = random_position(&mut rng, round % 30);
        let before = board.clone();

        // Coordinates need not form a legal move
        let mv = Move::new(random_square(&mut rng), random_square(&mut rng));
        let captured = board.apply_move(mv);
        board.undo_move(mv, captured);

        assert_eq!(board, before, "round {round}: {mv} was not undone exactly");
    }
}

#[test]
fn nested_apply_undo_unwinds_in_reverse_order() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut board = random_position(&mut rng, 10);
    let before = board.clone();

    let mut stack = Vec::new();
    let mut color = Color::White;
    for _ in 0..12 {
        let moves = board.legal_moves(color);
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        stack.push((mv, board.apply_move(mv)));
        color = color.opposite();
    }
    while let Some((mv, captured)) = stack.pop() {
        board.undo_move(mv, captured);
    }

    assert_eq!(board, before);
}

#[test]
fn set_then_get_on_every_square() {
    let mut board = Board::empty();
    let rook = Piece::new(PieceKind::Rook, Color::Black);
    for index in 0..64 {
        let square = Square::from_index(index);
        board.set(square.x, square.y, rook);
        assert_eq!(board.get(square.x, square.y), rook);
        assert_eq!(board.piece_at(square), rook);
    }
}

#[test]
fn enumerated_moves_never_self_capture_or_leave_the_board() {
    let mut rng = StdRng::seed_from_u64(42);
    for plies in [0, 5, 15, 25] {
        let board = random_position(&mut rng, plies);
        for color in [Color::White, Color::Black] {
            for mv in board.legal_moves(color) {
                assert!(mv.from.on_board() && mv.to.on_board());
                assert!(!mv.is_null());
                assert!(board.piece_at(mv.from).belongs_to(color));
                assert!(!board.piece_at(mv.to).belongs_to(color));
            }
        }
    }
}

#[test]
fn back_ranks_setup_opening_moves() {
    let board = Board::with_setup(Setup::BackRanks);
    let moves = board.legal_moves(Color::White);
    // Knights jump to their usual squares; rooks, queen, king and bishops slide
    // or step along the empty board in front of them.
    assert!(moves.contains(&"b1c3".parse().unwrap()));
    assert!(moves.contains(&"a1a8".parse().unwrap()));
    assert!(moves.contains(&"d1h5".parse().unwrap()));
    assert!(moves.contains(&"e1e2".parse().unwrap()));
    assert!(!moves.contains(&"a1b1".parse().unwrap()));
}
