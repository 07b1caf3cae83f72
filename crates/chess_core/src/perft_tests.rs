use super::*;
use crate::{board::Board, types::Color, EngineError};

#[test]
fn test_perft_startpos_shallow() {
    let mut b = Board::startpos();
    assert_eq!(perft(&mut b, 0), Ok(1));
    assert_eq!(perft(&mut b, 1), Ok(20));
    assert_eq!(perft(&mut b, 2), Ok(400));
    assert_eq!(perft(&mut b, 3), Ok(8902));
    // The buffers unwind cleanly
    assert_eq!(b, Board::startpos());
}

#[test]
#[ignore] // slow in debug builds, run with --ignored
fn test_perft_startpos_depth_four() {
    // Castling, en passant and promotion cannot occur within four plies of
    // the start, so the count matches full-rules chess.
    let mut b = Board::startpos();
    assert_eq!(perft(&mut b, 4), Ok(197_281));
}

#[test]
fn test_perft_bare_kings() {
    // Hand-countable: three king moves each way
    let mut b = Board::from_fen("k7/8/8/8/8/8/8/K7 w - - 0 1").unwrap();
    assert_eq!(perft(&mut b, 1), Ok(3));
    assert_eq!(perft(&mut b, 2), Ok(9));
}

#[test]
fn test_perft_surfaces_missing_king() {
    let mut b = Board::empty();
    assert_eq!(
        perft(&mut b, 2),
        Err(EngineError::NoKingFound(Color::White))
    );
}
