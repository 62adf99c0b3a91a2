//! Mancala-Rust: a Kalah engine with a Monte Carlo opponent.
//!
//! ## Usage
//!
//! - `mancala-rust` - Show a demo
//! - `mancala-rust play` - Play against the Monte Carlo opponent
//! - `mancala-rust auto` - Watch two Monte Carlo opponents play each other
//! - `mancala-rust demo` - Run the demo

use anyhow::Result;
use clap::{Parser, Subcommand};

use mancala_rust::board::{Board, MoveOutcome, Side, play_move};
use mancala_rust::constants::N_TRIALS;
use mancala_rust::game::{HumanProvider, MonteCarloProvider, draw_board, play_game};
use mancala_rust::montecarlo::{dump_tally, run_trials};

/// Mancala-Rust: a Kalah engine with a Monte Carlo opponent
#[derive(Parser)]
#[command(name = "mancala-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Random playouts per automated decision
    #[arg(long, default_value_t = N_TRIALS)]
    trials: usize,

    /// Seed for the playout RNG (randomly seeded if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Dump per-house tallies to stderr after each automated decision
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the Monte Carlo opponent
    Play {
        /// Take the second seat instead of the first
        #[arg(long)]
        second: bool,
    },
    /// Watch two Monte Carlo opponents play each other
    Auto,
    /// Run a short demo of the engine
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(seed) = cli.seed {
        fastrand::seed(seed);
    }

    match cli.command {
        Some(Commands::Play { second }) => run_play(cli.trials, cli.verbose, second),
        Some(Commands::Auto) => run_auto(cli.trials, cli.verbose),
        Some(Commands::Demo) | None => run_demo(cli.trials, cli.verbose),
    }
}

fn run_play(trials: usize, verbose: bool, second: bool) -> Result<()> {
    let mut board = Board::new();
    let mut human = HumanProvider;
    let mut engine = MonteCarloProvider::new(trials, verbose);

    if second {
        play_game(&mut board, &mut engine, &mut human)?;
    } else {
        play_game(&mut board, &mut human, &mut engine)?;
    }
    Ok(())
}

fn run_auto(trials: usize, verbose: bool) -> Result<()> {
    let mut board = Board::new();
    let mut one = MonteCarloProvider::new(trials, verbose);
    let mut two = MonteCarloProvider::new(trials, verbose);
    play_game(&mut board, &mut one, &mut two)?;
    Ok(())
}

fn run_demo(trials: usize, verbose: bool) -> Result<()> {
    println!("Mancala-Rust: Kalah with a Monte Carlo opponent\n");

    println!("=== Opening position ===");
    let mut board = Board::new();
    print!("{}", draw_board(&board, Side::One));

    println!("\n=== Monte Carlo selection ===");
    println!("Running {trials} random playouts...");
    let tally = run_trials(&board, Side::One, trials);
    if verbose {
        dump_tally(&tally, Side::One);
    }
    let house = tally.best_house(Side::One).unwrap_or(0);
    let winrate = tally.wins(Side::One, house) as f64 / tally.trials(house).max(1) as f64;
    println!("Best first move for player 1: house {house}");
    println!("Estimated winrate: {:.1}%", winrate * 100.0);

    let outcome = play_move(&mut board, Side::One, house);
    let next = if outcome == MoveOutcome::ExtraTurn {
        Side::One
    } else {
        Side::Two
    };
    print!("{}", draw_board(&board, next));
    Ok(())
}
