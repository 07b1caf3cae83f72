//! Interactive terminal game against an engine.

use crate::config::{Config, Difficulty};
use crate::game::{GameOutcome, GameState};
use chess_core::{is_in_check, legal_moves, parse_uci_move, Color, Engine, EngineError, MAX_DEPTH};
use std::io::{self, Write};

pub fn run(args: &[String]) {
    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}", e);
            Config::default()
        }
    };

    // Parse optional arguments
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--engine" | "-e" => {
                if i + 1 < args.len() {
                    config.engine = args[i + 1].clone();
                    i += 1;
                }
            }
            "--color" | "-c" => {
                if i + 1 < args.len() {
                    config.color = args[i + 1].clone();
                    i += 1;
                }
            }
            "--difficulty" => {
                if i + 1 < args.len() {
                    match args[i + 1].to_lowercase().as_str() {
                        "easy" => config.difficulty = Difficulty::Easy,
                        "medium" => config.difficulty = Difficulty::Medium,
                        "hard" => config.difficulty = Difficulty::Hard,
                        other => eprintln!("Unknown difficulty: {}", other),
                    }
                    config.depth = None;
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    config.depth = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    let depth = config.search_depth();
    if depth > MAX_DEPTH {
        eprintln!("Error: depth {} exceeds the maximum of {}", depth, MAX_DEPTH);
        return;
    }

    let human = config.human_color();
    let mut engine = crate::create_engine(&config.engine);
    tracing::info!("playing against {} at depth {}", engine.name(), depth);

    println!("You play {} against {} (depth {}).", human, engine.name(), depth);
    println!("Enter moves in coordinate notation (e2e4). Commands: moves, board, resign.");
    println!();

    if let Err(e) = game_loop(engine.as_mut(), human, depth) {
        eprintln!("Game error: {}", e);
    }
}

fn game_loop(engine: &mut dyn Engine, human: Color, depth: u8) -> Result<(), EngineError> {
    let mut state = GameState::new();
    engine.new_game();
    println!("{}", state.board);

    while !state.is_over() {
        let side = state.board.side_to_move;

        if side == human {
            let line = match prompt(&format!("{} to move> ", side)) {
                Some(line) => line,
                None => {
                    println!("Goodbye.");
                    return Ok(());
                }
            };

            match line.as_str() {
                "" => continue,
                "quit" | "resign" => {
                    println!("You resigned.");
                    return Ok(());
                }
                "board" => {
                    println!("{}", state.board);
                    continue;
                }
                "moves" => {
                    let moves = legal_moves(&state.board, side)?;
                    let listed: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                    println!("{}", listed.join(" "));
                    continue;
                }
                text => match parse_uci_move(&state.board, text) {
                    Some(mv) => state.try_move(mv)?,
                    None => {
                        println!("Illegal move: {}", text);
                        continue;
                    }
                },
            }
        } else {
            let result = engine.search(&state.board, depth)?;
            tracing::debug!(
                "search finished: score {} after {} nodes",
                result.score,
                result.nodes
            );

            match result.best_move {
                Some(mv) => {
                    println!("{} plays {}", engine.name(), mv);
                    state.try_move(mv)?;
                }
                None => break,
            }
        }

        println!("{}", state.board);

        if !state.is_over() && is_in_check(&state.board, state.board.side_to_move)? {
            println!("Check!");
        }
    }

    match state.outcome {
        GameOutcome::WhiteWins => println!("Checkmate! White wins."),
        GameOutcome::BlackWins => println!("Checkmate! Black wins."),
        GameOutcome::Draw => println!("Stalemate. Draw."),
        GameOutcome::InProgress => {}
    }

    Ok(())
}

fn prompt(text: &str) -> Option<String> {
    print!("{}", text);
    io::stdout().flush().ok();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
