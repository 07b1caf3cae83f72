use std::fmt;

use thiserror::Error;

use crate::types::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN is missing the piece placement or side-to-move field")]
    MissingFields,
    #[error("expected 8 ranks in the piece placement, got {0}")]
    BadRankCount(usize),
    #[error("invalid piece character {0:?}")]
    BadPieceChar(char),
    #[error("rank {0:?} does not describe exactly 8 files")]
    BadRankWidth(String),
    #[error("invalid side to move {0:?}")]
    BadSideToMove(String),
}

/// An owned board value: piece placement plus the side to move.
///
/// No rule state beyond this exists under the simplified ruleset (no
/// castling rights, en-passant square or move clocks). Boards without a
/// king are constructible for test setups; legality and search queries on
/// them fail with [`EngineError::NoKingFound`](crate::EngineError).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub squares: [Option<Piece>; 64],
    pub side_to_move: Color,
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();

        // Pawns
        for f in 0..8 {
            b.squares[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.squares[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            b.squares[f] = Some(Piece::new(Color::White, kind));
            b.squares[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        b
    }

    /// Parses the piece placement and side-to-move fields of a FEN string.
    ///
    /// The castling, en-passant and clock fields carry no state under this
    /// ruleset; they are tolerated and ignored when present, so both bare
    /// two-field strings and full six-field FENs parse.
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::MissingFields)?;
        let stm = parts.next().ok_or(FenError::MissingFields)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::BadRankCount(ranks.len()));
        }

        let mut squares = [None; 64];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let piece = piece_from_char(ch).ok_or(FenError::BadPieceChar(ch))?;
                    match sq(file, rank) {
                        Some(s) => squares[s as usize] = Some(piece),
                        None => return Err(FenError::BadRankWidth((*rank_str).to_string())),
                    }
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::BadRankWidth((*rank_str).to_string()));
                }
            }
            if file != 8 {
                return Err(FenError::BadRankWidth((*rank_str).to_string()));
            }
        }

        let side_to_move = match stm {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::BadSideToMove(other.to_string())),
        };

        Ok(Board {
            squares,
            side_to_move,
        })
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.squares[sq as usize]
    }

    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.squares[sq as usize] = pc;
    }

    pub fn king_square(&self, color: Color) -> Option<u8> {
        for i in 0..64 {
            if let Some(pc) = self.squares[i] {
                if pc.color == color && pc.kind == PieceKind::King {
                    return Some(i as u8);
                }
            }
        }
        None
    }

    /// Moves the piece on `mv.from` to `mv.to`, flips the side to move and
    /// returns whatever occupied the destination.
    ///
    /// The origin square must be occupied; moves coming out of the
    /// generator or past [`apply_move`](crate::movegen::apply_move)
    /// validation always are. Pair each call with [`Board::unmake_move`]
    /// to restore the position exactly.
    pub fn make_move(&mut self, mv: Move) -> Option<Piece> {
        let moved = self.piece_at(mv.from).expect("no piece on from-square");
        let captured = self.piece_at(mv.to);
        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(moved));
        self.side_to_move = self.side_to_move.other();
        captured
    }

    /// Reverts a [`Board::make_move`] call, restoring the captured piece
    /// and the side to move. Calls must nest strictly: always unmake the
    /// most recent move first.
    pub fn unmake_move(&mut self, mv: Move, captured: Option<Piece>) {
        let moved = self.piece_at(mv.to).expect("no piece on to-square");
        self.set_piece(mv.to, captured);
        self.set_piece(mv.from, Some(moved));
        self.side_to_move = self.side_to_move.other();
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let ch = match self.squares[rank * 8 + file] {
                    Some(pc) => piece_to_char(pc),
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "\n   a b c d e f g h")
    }
}

fn piece_from_char(ch: char) -> Option<Piece> {
    let color = if ch.is_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(color, kind))
}

pub(crate) fn piece_to_char(pc: Piece) -> char {
    let ch = match pc.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match pc.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
