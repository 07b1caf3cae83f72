use super::*;
use chess_core::{coord_to_sq, legal_moves, Color, Move, MATE_SCORE};

fn mv(from: &str, to: &str) -> Move {
    Move::new(coord_to_sq(from).unwrap(), coord_to_sq(to).unwrap())
}

#[test]
fn minimax_engine_returns_legal_move() {
    let board = Board::startpos();
    let mut engine = MinimaxEngine::new();

    let result = engine.search(&board, 2).unwrap();
    let legal = legal_moves(&board, Color::White).unwrap();

    assert!(legal.contains(&result.best_move.unwrap()));
    assert_eq!(result.depth, 2);
    assert!(result.nodes > 0);
}

#[test]
fn minimax_engine_searches_for_the_side_to_move() {
    let mut board = Board::startpos();
    let king_pawn = board.make_move(mv("e2", "e4"));
    assert!(king_pawn.is_none());

    let mut engine = MinimaxEngine::new();
    let result = engine.search(&board, 1).unwrap();
    let legal = legal_moves(&board, Color::Black).unwrap();

    assert!(legal.contains(&result.best_move.unwrap()));
}

#[test]
fn minimax_engine_finds_mate_in_one() {
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    let mut engine = MinimaxEngine::new();

    let result = engine.search(&board, 2).unwrap();

    assert_eq!(result.best_move, Some(mv("e1", "e8")));
    assert_eq!(result.score, MATE_SCORE);
}

#[test]
fn minimax_engine_reports_no_move_when_mated() {
    // Scholar's mate, black to move with no reply.
    let board =
        Board::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();
    let mut engine = MinimaxEngine::new();

    let result = engine.search(&board, 3).unwrap();

    assert_eq!(result.best_move, None);
    assert_eq!(result.score, MATE_SCORE);
}

#[test]
fn minimax_engine_rejects_excessive_depth() {
    let board = Board::startpos();
    let mut engine = MinimaxEngine::new();

    assert_eq!(engine.search(&board, 11), Err(EngineError::InvalidDepth(11)));
}
