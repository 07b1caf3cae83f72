use crate::{board::Board, movegen, types::Color, EngineError};

/// Check and checkmate state of one side, computed together since callers
/// usually want both after a move lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status {
    pub in_check: bool,
    pub in_checkmate: bool,
}

/// Whether `color`'s king is attacked: some pseudo-legal move of the
/// opponent ends on the king's square.
pub fn is_in_check(board: &Board, color: Color) -> Result<bool, EngineError> {
    let king = board
        .king_square(color)
        .ok_or(EngineError::NoKingFound(color))?;
    let mut enemy_moves = Vec::with_capacity(64);
    Ok(movegen::square_attacked(
        board,
        king,
        color.other(),
        &mut enemy_moves,
    ))
}

/// Checkmate: in check with no legal reply. A side with no legal moves
/// that is not in check is stalemated, never mated.
pub fn is_checkmate(board: &Board, color: Color) -> Result<bool, EngineError> {
    Ok(is_in_check(board, color)? && movegen::legal_moves(board, color)?.is_empty())
}

pub fn query_status(board: &Board, color: Color) -> Result<Status, EngineError> {
    let in_check = is_in_check(board, color)?;
    let in_checkmate = in_check && movegen::legal_moves(board, color)?.is_empty();
    Ok(Status {
        in_check,
        in_checkmate,
    })
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;
