//! Mancala-Rust: a minimalistic Kalah engine with a Monte Carlo opponent.
//!
//! This crate simulates Mancala in the Kalah variant: four stones per house,
//! six houses per side, and captures that take the capturing stone along
//! with the opposite house. The automated opponent ranks candidate first
//! moves by playing large numbers of uniformly random games to completion.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and engine parameters
//! - [`board`] - Core game logic (board state, sowing, captures, game end)
//! - [`playout`] - Random game simulation
//! - [`montecarlo`] - Monte Carlo move selection
//! - [`game`] - Move providers, board drawing, and the turn loop
//!
//! ## Example
//!
//! ```
//! use mancala_rust::board::{Board, MoveOutcome, Side, play_move};
//! use mancala_rust::montecarlo::select_move;
//!
//! // Create a new game
//! let mut board = Board::new();
//!
//! // Four stones from house 3 land the last one in the store: extra turn.
//! assert_eq!(play_move(&mut board, Side::One, 3), MoveOutcome::ExtraTurn);
//!
//! // Ask the Monte Carlo opponent for the follow-up.
//! let house = select_move(&board, Side::One, 1_000);
//! assert!(board.house(Side::One, house) > 0);
//! ```

pub mod board;
pub mod constants;
pub mod game;
pub mod montecarlo;
pub mod playout;
