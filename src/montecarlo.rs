//! Monte Carlo move selection.
//!
//! The selector runs a fixed budget of independent random playouts from the
//! current position. Each trial picks a random legal first move, plays the
//! game out with [`random_playout`], and records which side finished with
//! the fuller store. The first move with the best win margin is chosen.
//!
//! This is a flat estimator: trials are independent, there is no search
//! tree, and a tied playout credits both sides.

use crate::board::{Board, MoveOutcome, Side, play_move};
use crate::constants::NUM_HOUSES;
use crate::playout::{random_house, random_playout};

/// Per-first-move trial results for one decision.
///
/// `wins` counts terminal positions where a side held the strictly larger
/// store; a tie credits both sides. A first move's two win counters
/// therefore sum to anywhere between its trial count and twice that.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveTally {
    trials: [u32; NUM_HOUSES],
    wins: [[u32; NUM_HOUSES]; 2],
}

impl MoveTally {
    /// Playouts that opened with `house`.
    #[inline]
    pub fn trials(&self, house: usize) -> u32 {
        self.trials[house]
    }

    /// Playouts opened with `house` that `side` won (ties count for both).
    #[inline]
    pub fn wins(&self, side: Side, house: usize) -> u32 {
        self.wins[side.index()][house]
    }

    /// Win margin of `house` from `side`'s point of view.
    #[inline]
    pub fn margin(&self, side: Side, house: usize) -> i64 {
        self.wins(side, house) as i64 - self.wins(side.opponent(), house) as i64
    }

    fn record(&mut self, first_move: usize, terminal: &Board) {
        self.trials[first_move] += 1;
        let one = terminal.store(Side::One);
        let two = terminal.store(Side::Two);
        if one >= two {
            self.wins[Side::One.index()][first_move] += 1;
        }
        if two >= one {
            self.wins[Side::Two.index()][first_move] += 1;
        }
    }

    /// The candidate first move with the best margin for `side`.
    ///
    /// Houses with no recorded trials were never legally choosable and are
    /// skipped. Ties go to the lowest house index.
    pub fn best_house(&self, side: Side) -> Option<usize> {
        let mut best_house = None;
        let mut best_margin = i64::MIN;
        for house in 0..NUM_HOUSES {
            if self.trials[house] == 0 {
                continue;
            }
            let margin = self.margin(side, house);
            if best_house.is_none() || margin > best_margin {
                best_house = Some(house);
                best_margin = margin;
            }
        }
        best_house
    }
}

/// Run `trials` independent random playouts from `board`, `side` to move.
///
/// The position must not be terminal. Each trial clones the board; the
/// authoritative board is never touched.
pub fn run_trials(board: &Board, side: Side, trials: usize) -> MoveTally {
    let mut tally = MoveTally::default();

    for _ in 0..trials {
        let mut sim = board.clone();
        let first_move = random_house(&sim, side);

        match play_move(&mut sim, side, first_move) {
            MoveOutcome::TurnOver => random_playout(&mut sim, side.opponent()),
            MoveOutcome::ExtraTurn => random_playout(&mut sim, side),
            MoveOutcome::GameOver => {}
            // random_house only proposes non-empty houses
            MoveOutcome::Illegal => unreachable!("trial opened with an illegal house"),
        }

        tally.record(first_move, &sim);
    }

    tally
}

/// Choose a house for `side` by Monte Carlo sampling.
///
/// Runs `trials` playouts and returns the first move with the best win
/// margin. Falls back to the lowest-index legal house if no candidate
/// gathered a trial, so the result is always legal for a live board.
pub fn select_move(board: &Board, side: Side, trials: usize) -> usize {
    let tally = run_trials(board, side, trials);
    match tally.best_house(side) {
        Some(house) => house,
        None => board
            .first_legal(side)
            .expect("select_move called on a terminal position"),
    }
}

/// Print per-house tallies for one decision to stderr.
pub fn dump_tally(tally: &MoveTally, side: Side) {
    for house in 0..NUM_HOUSES {
        eprintln!(
            "house {} trials={} w={} l={} margin={}",
            house,
            tally.trials(house),
            tally.wins(side, house),
            tally.wins(side.opponent(), house),
            tally.margin(side, house),
        );
    }
}
