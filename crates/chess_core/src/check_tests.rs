use super::*;
use crate::{board::Board, movegen::apply_move, types::*, EngineError};

fn mv(from: &str, to: &str) -> Move {
    Move::new(
        coord_to_sq(from).unwrap(),
        coord_to_sq(to).unwrap(),
    )
}

#[test]
fn test_rook_gives_check_along_open_file() {
    let b = Board::from_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").unwrap();
    assert_eq!(is_in_check(&b, Color::Black), Ok(true));
    assert_eq!(is_in_check(&b, Color::White), Ok(false));
}

#[test]
fn test_blocked_ray_is_no_check() {
    // Black's own pawn on e5 shields the king from the e1 rook
    let b = Board::from_fen("4k3/8/8/4p3/8/8/8/4RK2 b - - 0 1").unwrap();
    assert_eq!(is_in_check(&b, Color::Black), Ok(false));
}

#[test]
fn test_pawn_checks_diagonally_not_ahead() {
    // A pawn attacks diagonally
    let b = Board::from_fen("8/8/8/4k3/3P4/8/8/4K3 b - - 0 1").unwrap();
    assert_eq!(is_in_check(&b, Color::Black), Ok(true));

    // A pawn push needs an empty square, so the king straight ahead is safe
    let b = Board::from_fen("8/8/8/4k3/4P3/8/8/4K3 b - - 0 1").unwrap();
    assert_eq!(is_in_check(&b, Color::Black), Ok(false));
}

#[test]
fn test_knight_check() {
    let b = Board::from_fen("8/8/8/4k3/8/3N4/8/4K3 b - - 0 1").unwrap();
    assert_eq!(is_in_check(&b, Color::Black), Ok(true));
}

#[test]
fn test_fools_mate_is_checkmate() {
    let mut b = Board::startpos();
    for m in [
        mv("f2", "f3"),
        mv("e7", "e5"),
        mv("g2", "g4"),
        mv("d8", "h4"),
    ] {
        apply_move(&mut b, m).unwrap();
    }

    assert_eq!(is_in_check(&b, Color::White), Ok(true));
    assert_eq!(is_checkmate(&b, Color::White), Ok(true));
    assert_eq!(
        query_status(&b, Color::White),
        Ok(Status {
            in_check: true,
            in_checkmate: true,
        })
    );
    assert!(crate::movegen::legal_moves(&b, Color::White)
        .unwrap()
        .is_empty());
}

#[test]
fn test_back_rank_mate() {
    let b = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert_eq!(is_checkmate(&b, Color::Black), Ok(true));
}

#[test]
fn test_check_with_escape_is_not_mate() {
    // Qh5 checks through the vacated f-pawn square; g7g6 blocks
    let b =
        Board::from_fen("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2").unwrap();
    assert_eq!(is_in_check(&b, Color::Black), Ok(true));
    assert_eq!(is_checkmate(&b, Color::Black), Ok(false));
    let status = query_status(&b, Color::Black).unwrap();
    assert!(status.in_check && !status.in_checkmate);
}

#[test]
fn test_stalemate_is_not_checkmate() {
    // Black king in the corner, boxed in but not attacked
    let b = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(is_in_check(&b, Color::Black), Ok(false));
    assert_eq!(is_checkmate(&b, Color::Black), Ok(false));
    assert!(crate::movegen::legal_moves(&b, Color::Black)
        .unwrap()
        .is_empty());
}

#[test]
fn test_missing_king_is_an_error() {
    assert_eq!(
        is_in_check(&Board::empty(), Color::White),
        Err(EngineError::NoKingFound(Color::White))
    );

    let mut b = Board::empty();
    b.set_piece(4, Some(Piece::new(Color::White, PieceKind::King)));
    assert_eq!(
        is_checkmate(&b, Color::Black),
        Err(EngineError::NoKingFound(Color::Black))
    );
    // Only the queried side needs a king
    assert_eq!(is_in_check(&b, Color::White), Ok(false));
}
