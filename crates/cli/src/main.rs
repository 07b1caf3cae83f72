//! jaque terminal front end
//!
//! Play against an engine in the terminal or run engine-versus-engine
//! matches with a results summary.

use chess_core::Engine;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use std::env;

mod config;
mod game;
mod play;
mod selfplay;

fn print_usage() {
    println!("jaque - simplified-rules chess in the terminal");
    println!();
    println!("Usage:");
    println!("  jaque play [--engine E] [--color white|black] [--difficulty easy|medium|hard] [--depth N]");
    println!("  jaque selfplay <engine1> <engine2> [--games N] [--depth N] [--max-moves N] [--out FILE]");
    println!();
    println!("Engines:");
    println!("  minimax       - Fixed-depth minimax with material evaluation");
    println!("  random        - Uniform random legal moves");
    println!();
    println!("Settings default from jaque.toml when present; flags override.");
    println!();
    println!("Examples:");
    println!("  jaque play --color black --difficulty hard");
    println!("  jaque selfplay minimax random --games 20 --depth 2 --out results.json");
}

fn create_engine(spec: &str) -> Box<dyn Engine> {
    match spec.to_lowercase().as_str() {
        "minimax" | "mm" => Box::new(MinimaxEngine::new()),
        "random" | "rand" => Box::new(RandomEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}, using minimax", spec);
            Box::new(MinimaxEngine::new())
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "play" => play::run(&args[2..]),
        "selfplay" => selfplay::run(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
