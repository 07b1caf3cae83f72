//! Engine versus engine matches with a results summary.

use crate::game::{GameOutcome, GameState};
use chess_core::{Color, Engine, EngineError, MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for an engine match.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play.
    pub num_games: u32,
    /// Search depth for both engines.
    pub depth: u8,
    /// Games hitting this many plies are scored as draws.
    pub max_moves: u32,
    /// Whether to alternate colors each game.
    pub alternate_colors: bool,
    /// Print progress during the match.
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 3,
            max_moves: 200,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// Aggregated match outcome from the first engine's perspective.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSummary {
    pub engine1: String,
    pub engine2: String,
    pub depth: u8,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchSummary {
    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score in [0, 1] from the first engine's perspective.
    pub fn score(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total as f64
    }

    /// Save the summary to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }
}

/// Run a match between two engines.
///
/// Returns the tally from `engine1`'s perspective.
pub fn run_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchSummary, EngineError> {
    let mut summary = MatchSummary {
        engine1: engine1.name().to_string(),
        engine2: engine2.name().to_string(),
        depth: config.depth,
        ..Default::default()
    };

    for game_num in 0..config.num_games {
        let engine1_white = !config.alternate_colors || game_num % 2 == 0;

        let outcome = if engine1_white {
            play_game(engine1, engine2, config)?
        } else {
            play_game(engine2, engine1, config)?
        };

        match outcome {
            GameOutcome::WhiteWins if engine1_white => summary.wins += 1,
            GameOutcome::BlackWins if !engine1_white => summary.wins += 1,
            GameOutcome::WhiteWins | GameOutcome::BlackWins => summary.losses += 1,
            _ => summary.draws += 1,
        }

        if config.verbose {
            let outcome_str = match outcome {
                GameOutcome::WhiteWins => "1-0",
                GameOutcome::BlackWins => "0-1",
                _ => "1/2",
            };
            let white_name = if engine1_white {
                summary.engine1.as_str()
            } else {
                summary.engine2.as_str()
            };
            println!(
                "Game {}/{}: {} ({} as white) - Score: {}-{}-{}",
                game_num + 1,
                config.num_games,
                outcome_str,
                white_name,
                summary.wins,
                summary.losses,
                summary.draws
            );
        }
    }

    Ok(summary)
}

/// Play a single game to completion, returns the outcome from White's side.
fn play_game(
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    config: &MatchConfig,
) -> Result<GameOutcome, EngineError> {
    let mut state = GameState::new();
    white.new_game();
    black.new_game();

    while !state.is_over() && (state.moves.len() as u32) < config.max_moves {
        let result = if state.board.side_to_move == Color::White {
            white.search(&state.board, config.depth)?
        } else {
            black.search(&state.board, config.depth)?
        };

        match result.best_move {
            Some(mv) => state.try_move(mv)?,
            None => break,
        }
    }

    if state.is_over() {
        Ok(state.outcome)
    } else {
        // Move cap reached. The simplified rules have no repetition or
        // fifty-move draws, so endless shuffling must be cut off.
        Ok(GameOutcome::Draw)
    }
}

pub fn run(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: selfplay requires two engine specifications");
        crate::print_usage();
        return;
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    let mut config = MatchConfig::default();
    let mut out_path: Option<String> = None;

    // Parse optional arguments
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.num_games = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    config.depth = args[i + 1].parse().unwrap_or(3);
                    i += 1;
                }
            }
            "--max-moves" | "-m" => {
                if i + 1 < args.len() {
                    config.max_moves = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    if config.depth > MAX_DEPTH {
        eprintln!(
            "Error: depth {} exceeds the maximum of {}",
            config.depth, MAX_DEPTH
        );
        return;
    }

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Games: {}, Depth: {}", config.num_games, config.depth);
    println!();

    let mut engine1 = crate::create_engine(engine1_spec);
    let mut engine2 = crate::create_engine(engine2_spec);

    let summary = match run_match(engine1.as_mut(), engine2.as_mut(), &config) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Match aborted: {}", e);
            return;
        }
    };

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        summary.engine1, summary.wins, summary.losses, summary.draws
    );
    println!("Score: {:.1}%", summary.score() * 100.0);

    if let Some(path) = out_path {
        match summary.save(Path::new(&path)) {
            Ok(()) => println!("Results written to {}", path),
            Err(e) => eprintln!("Warning: {}", e),
        }
    }
}
