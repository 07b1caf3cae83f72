use crate::{board::Board, movegen::legal_moves_into, types::Move, EngineError};

/// Pure perft node count: leaf positions reachable in exactly `depth`
/// plies of legal play. Used to validate the generator against known
/// counts.
pub fn perft(board: &mut Board, depth: u8) -> Result<u64, EngineError> {
    if depth == 0 {
        return Ok(1);
    }

    fn inner(board: &mut Board, depth: u8, layers: &mut [Vec<Move>]) -> Result<u64, EngineError> {
        if depth == 0 {
            return Ok(1);
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        let stm = board.side_to_move;
        legal_moves_into(board, stm, buf)?;

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let captured = board.make_move(mv);
            nodes += inner(board, depth - 1, rest)?;
            board.unmake_move(mv, captured);
        }
        Ok(nodes)
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, depth, &mut layers[..])
}

#[cfg(test)]
#[path = "perft_tests.rs"]
mod perft_tests;
