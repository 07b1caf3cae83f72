use super::*;
use crate::types::{coord_to_sq, Color, Move};

#[test]
fn test_parse_move_matches_legal_list() {
    let b = Board::startpos();
    assert_eq!(
        parse_uci_move(&b, "e2e4"),
        Some(Move::new(
            coord_to_sq("e2").unwrap(),
            coord_to_sq("e4").unwrap()
        ))
    );
    // Legal but for the other side
    assert_eq!(parse_uci_move(&b, "e7e5"), None);
    // Not a legal move shape
    assert_eq!(parse_uci_move(&b, "e2e5"), None);
    // Garbage and short input
    assert_eq!(parse_uci_move(&b, "e2"), None);
    assert_eq!(parse_uci_move(&b, "zz99"), None);
    // A trailing promotion letter is tolerated
    assert_eq!(
        parse_uci_move(&b, "e2e4q"),
        Some(Move::new(
            coord_to_sq("e2").unwrap(),
            coord_to_sq("e4").unwrap()
        ))
    );
}

#[test]
fn test_set_position_startpos_with_moves() {
    let mut b = Board::empty();
    set_position_from_uci(&mut b, &["startpos", "moves", "e2e4", "e7e5"]);

    let mut expected = Board::startpos();
    expected.make_move(Move::new(
        coord_to_sq("e2").unwrap(),
        coord_to_sq("e4").unwrap(),
    ));
    expected.make_move(Move::new(
        coord_to_sq("e7").unwrap(),
        coord_to_sq("e5").unwrap(),
    ));
    assert_eq!(b, expected);
    assert_eq!(b.side_to_move, Color::White);
}

#[test]
fn test_set_position_from_fen() {
    let mut b = Board::empty();
    set_position_from_uci(
        &mut b,
        &["fen", "k7/2K5/1Q6/8/8/8/8/8", "b", "-", "-", "0", "1"],
    );
    assert_eq!(b, Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b").unwrap());
}

#[test]
fn test_set_position_stops_at_first_bad_move() {
    let mut b = Board::empty();
    // The second "e2e4" is not legal for Black and truncates the list
    set_position_from_uci(&mut b, &["startpos", "moves", "e2e4", "e2e4", "e7e5"]);

    let mut expected = Board::startpos();
    expected.make_move(Move::new(
        coord_to_sq("e2").unwrap(),
        coord_to_sq("e4").unwrap(),
    ));
    assert_eq!(b, expected);
}

#[test]
fn test_set_position_bad_fen_falls_back_to_startpos() {
    let mut b = Board::empty();
    set_position_from_uci(&mut b, &["fen", "not", "a", "fen"]);
    assert_eq!(b, Board::startpos());
}
