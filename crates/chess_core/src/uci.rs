use crate::{board::Board, movegen::legal_moves, types::*};

/// Parse a coordinate-notation move ("e2e4") by matching it against the
/// legal move list, so only playable moves come back. A trailing
/// promotion letter is tolerated and ignored; this ruleset has none.
pub fn parse_uci_move(board: &Board, txt: &str) -> Option<Move> {
    if txt.len() < 4 {
        return None;
    }
    let from = coord_to_sq(txt.get(0..2)?)?;
    let to = coord_to_sq(txt.get(2..4)?)?;

    let legals = legal_moves(board, board.side_to_move).ok()?;
    legals.into_iter().find(|m| m.from == from && m.to == to)
}

/// Apply a UCI "position" payload: `startpos [moves ...]` or
/// `fen <fields ...> [moves ...]`.
///
/// An unparseable FEN leaves the start position in place; a move list is
/// applied up to the first move that fails to parse as legal.
pub fn set_position_from_uci(board: &mut Board, args: &[&str]) {
    *board = Board::startpos();

    let mut i = 0;
    if i < args.len() && args[i] == "fen" {
        i += 1;
        let start = i;
        while i < args.len() && args[i] != "moves" {
            i += 1;
        }
        let fen = args[start..i].join(" ");
        if let Ok(parsed) = Board::from_fen(&fen) {
            *board = parsed;
        }
    } else if i < args.len() && args[i] == "startpos" {
        i += 1;
    }

    if i < args.len() && args[i] == "moves" {
        i += 1;
        while i < args.len() {
            match parse_uci_move(board, args[i]) {
                Some(mv) => {
                    board.make_move(mv);
                }
                None => break,
            }
            i += 1;
        }
    }
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
