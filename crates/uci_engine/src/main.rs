//! Minimal UCI front end over the minimax engine.
//!
//! Speaks just enough of the protocol for GUIs and scripted matches:
//! uci / isready / setoption / ucinewgame / position / go / quit.

use chess_core::{set_position_from_uci, Board, Engine, MAX_DEPTH};
use minimax_engine::MinimaxEngine;
use std::io::{self, BufRead, Write};

fn main() {
    // UCI engines communicate via stdin/stdout.
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut board = Board::startpos();
    let mut engine = MinimaxEngine::new();
    let mut depth: u8 = 3; // simple default

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "uci" => {
                writeln!(stdout, "id name {}", engine.name()).ok();
                writeln!(stdout, "id author {}", engine.author()).ok();
                writeln!(
                    stdout,
                    "option name Depth type spin default 3 min 1 max {}",
                    MAX_DEPTH
                )
                .ok();
                writeln!(stdout, "uciok").ok();
                stdout.flush().ok();
            }
            "isready" => {
                writeln!(stdout, "readyok").ok();
                stdout.flush().ok();
            }
            "setoption" => {
                // Example: setoption name Depth value 4
                if let Some(idx_name) = parts.iter().position(|&x| x == "name") {
                    if idx_name + 1 < parts.len() && parts[idx_name + 1] == "Depth" {
                        if let Some(idx_val) = parts.iter().position(|&x| x == "value") {
                            if idx_val + 1 < parts.len() {
                                if let Ok(d) = parts[idx_val + 1].parse::<u8>() {
                                    depth = d.clamp(1, MAX_DEPTH);
                                }
                            }
                        }
                    }
                }
            }
            "ucinewgame" => {
                board = Board::startpos();
                engine.new_game();
            }
            "position" => {
                set_position_from_uci(&mut board, &parts[1..]);
            }
            "go" => {
                // No clock handling; "go depth N" overrides the option.
                let mut go_depth = depth;
                if let Some(idx) = parts.iter().position(|&x| x == "depth") {
                    if idx + 1 < parts.len() {
                        if let Ok(d) = parts[idx + 1].parse::<u8>() {
                            go_depth = d.clamp(1, MAX_DEPTH);
                        }
                    }
                }

                match engine.search(&board, go_depth) {
                    Ok(result) => match result.best_move {
                        Some(mv) => {
                            writeln!(
                                stdout,
                                "info depth {} nodes {}",
                                result.depth, result.nodes
                            )
                            .ok();
                            writeln!(stdout, "bestmove {}", mv).ok();
                        }
                        None => {
                            writeln!(stdout, "bestmove 0000").ok(); // no moves
                        }
                    },
                    Err(_) => {
                        writeln!(stdout, "bestmove 0000").ok();
                    }
                }
                stdout.flush().ok();
            }
            "quit" => break,
            _ => {
                // ignore unknown commands
            }
        }
    }
}
