use crate::{board::Board, types::*, EngineError};

/// All movement-rule moves for `color`, ignoring king safety.
///
/// The list is ordered by origin square, then destination, both row-major,
/// so repeated calls on equal boards yield identical move lists.
pub fn pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    pseudo_moves_into(board, color, &mut out);
    out.sort_unstable_by_key(|mv| (mv.from, mv.to));
    out
}

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the board only once.
pub fn legal_moves(board: &Board, color: Color) -> Result<Vec<Move>, EngineError> {
    let mut scratch = board.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut scratch, color, &mut out)?;
    Ok(out)
}

/// Generate all legal moves into the provided buffer, reusing it across
/// calls. The board is mutated while filtering and restored before return.
///
/// Errors with `NoKingFound` when `color` has no king: legality is defined
/// by king safety, so the filter is meaningless without one.
pub fn legal_moves_into(
    board: &mut Board,
    color: Color,
    out: &mut Vec<Move>,
) -> Result<(), EngineError> {
    let king = board
        .king_square(color)
        .ok_or(EngineError::NoKingFound(color))?;

    pseudo_moves_into(board, color, out);
    out.sort_unstable_by_key(|mv| (mv.from, mv.to));

    // Filter self-check moves in place by playing each on the board. The
    // king square only changes when the king itself moves; same-color
    // captures are never generated, so the king survives every candidate.
    let mut enemy_moves = Vec::with_capacity(64);
    out.retain(|&mv| {
        let captured = board.make_move(mv);
        let king_now = if mv.from == king { mv.to } else { king };
        let safe = !square_attacked(board, king_now, color.other(), &mut enemy_moves);
        board.unmake_move(mv, captured);
        safe
    });
    Ok(())
}

/// Validated move application for callers outside the generator: the move
/// must be a member of the legal move list for the side to move.
pub fn apply_move(board: &mut Board, mv: Move) -> Result<(), EngineError> {
    let legal = legal_moves(board, board.side_to_move)?;
    if !legal.contains(&mv) {
        return Err(EngineError::IllegalMove(mv));
    }
    board.make_move(mv);
    Ok(())
}

/// Whether any pseudo-legal move of `by` ends on `target`.
///
/// Pawn pushes require an empty destination, so for an occupied `target`
/// this matches attack coverage exactly; king squares always qualify.
pub(crate) fn square_attacked(board: &Board, target: u8, by: Color, buf: &mut Vec<Move>) -> bool {
    pseudo_moves_into(board, by, buf);
    buf.iter().any(|mv| mv.to == target)
}

pub(crate) fn pseudo_moves_into(board: &Board, color: Color, out: &mut Vec<Move>) {
    out.clear();
    for from in 0..64u8 {
        let pc = match board.piece_at(from) {
            Some(p) => p,
            None => continue,
        };
        if pc.color != color {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(board, from, pc.color, out),
            PieceKind::Knight => gen_knight(board, from, pc.color, out),
            PieceKind::Bishop => gen_slider(
                board,
                from,
                pc.color,
                out,
                &[(1, 1), (1, -1), (-1, 1), (-1, -1)],
            ),
            PieceKind::Rook => {
                gen_slider(board, from, pc.color, out, &[(1, 0), (-1, 0), (0, 1), (0, -1)])
            }
            PieceKind::Queen => gen_slider(
                board,
                from,
                pc.color,
                out,
                &[
                    (1, 1),
                    (1, -1),
                    (-1, 1),
                    (-1, -1),
                    (1, 0),
                    (-1, 0),
                    (0, 1),
                    (0, -1),
                ],
            ),
            PieceKind::King => gen_king(board, from, pc.color, out),
        }
    }
}

fn gen_pawn(board: &Board, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);

    let dir: i8 = match c {
        Color::White => 1,
        Color::Black => -1,
    };
    let start_rank: i8 = match c {
        Color::White => 1,
        Color::Black => 6,
    };

    // forward 1; a pawn parked on the last rank has no forward square
    if let Some(to) = sq(f, r + dir) {
        if board.piece_at(to).is_none() {
            out.push(Move::new(from, to));

            // forward 2 from the start rank, both squares empty
            if r == start_rank {
                if let Some(to2) = sq(f, r + 2 * dir) {
                    if board.piece_at(to2).is_none() {
                        out.push(Move::new(from, to2));
                    }
                }
            }
        }
    }

    // diagonal captures onto enemy pieces only
    for df in [-1, 1] {
        if let Some(to) = sq(f + df, r + dir) {
            if let Some(tpc) = board.piece_at(to) {
                if tpc.color != c {
                    out.push(Move::new(from, to));
                }
            }
        }
    }
}

fn gen_knight(board: &Board, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let deltas = [
        (1, 2),
        (2, 1),
        (-1, 2),
        (-2, 1),
        (1, -2),
        (2, -1),
        (-1, -2),
        (-2, -1),
    ];
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: u8, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_king(board: &Board, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let deltas = [
        (1, 1),
        (1, 0),
        (1, -1),
        (0, 1),
        (0, -1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
    ];
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
