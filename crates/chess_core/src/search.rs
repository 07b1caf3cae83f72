use crate::{
    board::Board, check::is_in_check, eval::evaluate, movegen::legal_moves_into, types::Color,
    EngineError, SearchResult,
};

/// Deepest supported search. Plain minimax visits every node, so anything
/// past this is unusable in practice anyway.
pub const MAX_DEPTH: u8 = 10;

/// Absolute score of a checkmated position, at any node depth.
pub const MATE_SCORE: i32 = 1000;

/// Fixed-depth minimax over the legal move list, no pruning: White
/// maximizes and Black minimizes the material evaluation.
///
/// `depth` counts plies below the root moves, so `depth == 0` degenerates
/// to a greedy pick of the move with the best immediate evaluation. Mate
/// and stalemate are recognized before the depth cutoff at every node.
/// The input board is never mutated; search runs on one scratch clone with
/// strictly nested make/unmake pairs. Ties keep the earliest move in the
/// deterministic generation order, so equal inputs select equal moves.
pub fn best_move(board: &Board, color: Color, depth: u8) -> Result<SearchResult, EngineError> {
    if depth > MAX_DEPTH {
        return Err(EngineError::InvalidDepth(depth));
    }
    // Surface a degenerate board before descending: both kings must exist.
    for side in [Color::White, Color::Black] {
        if board.king_square(side).is_none() {
            return Err(EngineError::NoKingFound(side));
        }
    }

    let mut scratch = board.clone();
    let mut nodes = 0u64;
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(&mut scratch, color, &mut moves)?;

    if moves.is_empty() {
        let score = if is_in_check(&scratch, color)? {
            mated_score(color)
        } else {
            0
        };
        return Ok(SearchResult {
            best_move: None,
            score,
            depth,
            nodes,
        });
    }

    let maximizing = color == Color::White;
    let mut best = moves[0];
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        let captured = scratch.make_move(mv);
        nodes += 1;
        let score = minimax(
            &mut scratch,
            color.other(),
            depth.saturating_sub(1),
            &mut nodes,
        )?;
        scratch.unmake_move(mv, captured);

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best = mv;
        }
    }

    Ok(SearchResult {
        best_move: Some(best),
        score: best_score,
        depth,
        nodes,
    })
}

fn minimax(
    board: &mut Board,
    color: Color,
    depth: u8,
    nodes: &mut u64,
) -> Result<i32, EngineError> {
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(board, color, &mut moves)?;

    // Mate and stalemate outrank the depth cutoff
    if moves.is_empty() {
        if is_in_check(board, color)? {
            return Ok(mated_score(color));
        }
        return Ok(0);
    }
    if depth == 0 {
        return Ok(evaluate(board));
    }

    let maximizing = color == Color::White;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        let captured = board.make_move(mv);
        *nodes += 1;
        let score = minimax(board, color.other(), depth - 1, nodes)?;
        board.unmake_move(mv, captured);

        if maximizing {
            if score > best {
                best = score;
            }
        } else if score < best {
            best = score;
        }
    }
    Ok(best)
}

/// Score of a position where `color` stands mated.
fn mated_score(color: Color) -> i32 {
    match color {
        Color::White => -MATE_SCORE,
        Color::Black => MATE_SCORE,
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
