//! Game state shared by the interactive and self-play loops.

use chess_core::{apply_move, is_in_check, legal_moves, Board, Color, EngineError, Move};

/// Final standing of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    WhiteWins,
    BlackWins,
    Draw,
}

/// A running game: the board plus its move history and outcome.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub moves: Vec<Move>,
    pub outcome: GameOutcome,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh game from the standard starting position.
    pub fn new() -> Self {
        Self {
            board: Board::startpos(),
            moves: Vec::new(),
            outcome: GameOutcome::InProgress,
        }
    }

    /// A game starting from an arbitrary position.
    pub fn from_board(board: Board) -> Result<Self, EngineError> {
        let mut state = Self {
            board,
            moves: Vec::new(),
            outcome: GameOutcome::InProgress,
        };
        state.refresh_outcome()?;
        Ok(state)
    }

    /// Validated move application; records the move and updates the outcome.
    pub fn try_move(&mut self, mv: Move) -> Result<(), EngineError> {
        apply_move(&mut self.board, mv)?;
        self.moves.push(mv);
        self.refresh_outcome()
    }

    pub fn is_over(&self) -> bool {
        self.outcome != GameOutcome::InProgress
    }

    /// Re-derives the outcome for the side now to move.
    fn refresh_outcome(&mut self) -> Result<(), EngineError> {
        let side = self.board.side_to_move;
        if legal_moves(&self.board, side)?.is_empty() {
            self.outcome = if is_in_check(&self.board, side)? {
                match side {
                    Color::White => GameOutcome::BlackWins,
                    Color::Black => GameOutcome::WhiteWins,
                }
            } else {
                GameOutcome::Draw
            };
        }
        Ok(())
    }
}
