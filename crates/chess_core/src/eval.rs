use crate::{board::Board, types::*};

/// Material balance, always from White's point of view: positive means
/// White is ahead regardless of whose turn it is. Pawn 1, knight and
/// bishop 3, rook 5, queen 9; kings carry no material weight.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0i32;
    for sq in 0..64u8 {
        if let Some(pc) = board.piece_at(sq) {
            let v = match pc.kind {
                PieceKind::Pawn => 1,
                PieceKind::Knight => 3,
                PieceKind::Bishop => 3,
                PieceKind::Rook => 5,
                PieceKind::Queen => 9,
                PieceKind::King => 0,
            };
            score += if pc.color == Color::White { v } else { -v };
        }
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
