//! Example demonstrating board generation and refinement.
//!
//! This example shows how to:
//! - Create a `BoardRefiner` with a `PushSolver`
//! - Generate the hardest board found within a time limit
//! - Display the board, its seed, the pushes and the player steps that solve it
//! - Pre-generate several boards concurrently, each with its own solver
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Pick the board size, difficulty and time limit:
//!
//! ```sh
//! cargo run --example generate_board -- --width 8 --height 8 --difficulty 6 --millis 3000
//! ```
//!
//! Reproduce a board from its seed:
//!
//! ```sh
//! cargo run --example generate_board -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Pre-generate a queue of boards in parallel:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example generate_board -- --lookahead 4
//! ```

use std::{process, time::Duration};

use boulder_generator::{
    BoardRefiner, BoardSeed, BoardSize, Difficulty, RefinerStats, SolvedBoard,
};
use boulder_solver::{PushSolver, solution_steps};
use clap::Parser;
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of columns.
    #[arg(long, value_name = "COLUMNS", default_value_t = 6)]
    width: usize,

    /// Number of rows.
    #[arg(long, value_name = "ROWS", default_value_t = 6)]
    height: usize,

    /// Requested difficulty, from 1 to 10.
    #[arg(short, long, value_name = "LEVEL", default_value_t = 3)]
    difficulty: u8,

    /// Time limit per board in milliseconds.
    #[arg(long, value_name = "MILLIS", default_value_t = 1_000)]
    millis: u64,

    /// Base seed as 64 hex digits. Random if omitted.
    #[arg(long, value_name = "HEX")]
    seed: Option<BoardSeed>,

    /// Number of boards to generate concurrently.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    lookahead: u64,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let size = match BoardSize::new(args.width, args.height) {
        Ok(size) => size,
        Err(err) => {
            eprintln!("Invalid board size: {err}");
            process::exit(2);
        }
    };
    let difficulty = match Difficulty::new(args.difficulty) {
        Ok(difficulty) => difficulty,
        Err(err) => {
            eprintln!("Invalid difficulty: {err}");
            process::exit(2);
        }
    };
    if args.lookahead == 0 {
        eprintln!("--lookahead must be at least 1.");
        process::exit(1);
    }

    let duration = Duration::from_millis(args.millis);
    let base = args.seed.unwrap_or_else(BoardSeed::random);

    // each board gets its own solver and seed, nothing is shared between workers
    let boards = (0..args.lookahead)
        .into_par_iter()
        .map(|i| {
            let seed = if args.lookahead == 1 {
                base
            } else {
                base.derive(i)
            };
            let solver = PushSolver::new();
            let refiner = BoardRefiner::new(&solver);
            let mut stats = RefinerStats::default();
            let board = refiner.create_best_with_stats(&size, difficulty, duration, seed, &mut stats);
            (seed, board, stats)
        })
        .collect::<Vec<_>>();

    let mut failed = false;
    for (seed, board, stats) in &boards {
        match board {
            Some(board) => print_board(board, stats),
            None => {
                eprintln!("No board accepted within {}ms for seed {seed}.", args.millis);
                failed = true;
            }
        }
    }
    if failed {
        process::exit(1);
    }
}

fn print_board(board: &SolvedBoard, stats: &RefinerStats) {
    println!("Seed:");
    println!("  {}", board.seed);
    println!();

    println!("Board:");
    for line in board.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Pushes ({}):", board.moves_needed());
    for push in board.solution.moves() {
        println!("  {push}");
    }
    println!();

    if let Some(steps) = solution_steps(&board.grid, board.solution.moves()) {
        let steps = steps.iter().map(ToString::to_string).collect::<Vec<_>>();
        println!("Steps ({}):", steps.len());
        println!("  {}", steps.join(" "));
        println!();
    }

    println!("Stats:");
    println!("  attempts: {}", stats.attempts());
    println!("  backoffs: {}", stats.backoffs());
    if let Some(difficulty) = stats.difficulty() {
        println!("  difficulty: {difficulty}");
    }
    println!("  hardening: {:?}", stats.hardening());
    println!();
}
