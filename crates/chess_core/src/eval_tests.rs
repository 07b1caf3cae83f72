use super::*;
use crate::board::Board;

#[test]
fn test_startpos_is_balanced() {
    assert_eq!(evaluate(&Board::startpos()), 0);
}

#[test]
fn test_material_values() {
    // White queen and king versus bare king
    let b = Board::from_fen("k7/8/8/8/8/8/8/KQ6 w - - 0 1").unwrap();
    assert_eq!(evaluate(&b), 9);

    // Black rook tips the scale the other way
    let b = Board::from_fen("k6r/8/8/8/8/8/8/K7 w - - 0 1").unwrap();
    assert_eq!(evaluate(&b), -5);

    // Kings carry no material weight
    let b = Board::from_fen("k7/8/8/8/8/8/8/K7 w - - 0 1").unwrap();
    assert_eq!(evaluate(&b), 0);
}

#[test]
fn test_sign_is_fixed_to_white() {
    // The score does not flip with the side to move
    let w = Board::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").unwrap();
    let b = Board::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b - - 0 1").unwrap();
    assert_eq!(evaluate(&w), 9);
    assert_eq!(evaluate(&b), 9);
}
