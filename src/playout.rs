//! Random playouts (random game simulation).
//!
//! A playout plays uniformly random legal moves until the game ends. The
//! Monte Carlo selector runs these by the hundred thousand to rank candidate
//! first moves, each on its own copy of the board.

use crate::board::{Board, MoveOutcome, Side, play_move};
use crate::constants::NUM_HOUSES;

/// Pick a uniformly random non-empty house for `side`.
///
/// Rejection sampling over a uniform index, so every legal house is equally
/// likely. The caller must guarantee at least one non-empty house; the
/// engine's terminal detection makes an all-empty row unreachable here.
pub fn random_house(board: &Board, side: Side) -> usize {
    loop {
        let house = fastrand::usize(..NUM_HOUSES);
        if board.house(side, house) > 0 {
            return house;
        }
    }
}

/// Play uniformly random moves, `side` first, until the game ends.
///
/// The board is left in its terminal state: both rows empty, every stone in
/// a store.
pub fn random_playout(board: &mut Board, mut side: Side) {
    loop {
        let house = random_house(board, side);
        match play_move(board, side, house) {
            MoveOutcome::TurnOver => side = side.opponent(),
            MoveOutcome::ExtraTurn => {}
            MoveOutcome::GameOver => return,
            // random_house only proposes non-empty houses
            MoveOutcome::Illegal => unreachable!("random playout chose an illegal house"),
        }
    }
}
