//! The interactive game surface: move providers, board drawing, turn loop.
//!
//! [`play_game`] alternates between two injected [`MoveProvider`]s, one per
//! seat, and feeds their choices to the rules engine. Providers come in two
//! flavors: a human at a terminal, re-prompted on bad input, and the Monte
//! Carlo selector. The engine validates every choice either way; an illegal
//! choice from an automated provider is a defect and aborts the game.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};

use crate::board::{Board, MoveOutcome, Side, play_move};
use crate::constants::NUM_HOUSES;
use crate::montecarlo::{dump_tally, run_trials};

/// A source of moves for one seat.
///
/// Chosen once at setup and injected into [`play_game`].
pub trait MoveProvider {
    /// Pick a house in `[0, 5]` for `side` on `board`.
    fn choose(&mut self, board: &Board, side: Side) -> Result<usize>;

    /// Whether an illegal choice can be recovered by asking again.
    ///
    /// True for a human at a prompt; false for automated providers, whose
    /// illegal moves indicate a defect rather than user error.
    fn interactive(&self) -> bool {
        false
    }
}

/// Interactive provider: draws the board and prompts on stdin.
pub struct HumanProvider;

impl MoveProvider for HumanProvider {
    fn choose(&mut self, board: &Board, side: Side) -> Result<usize> {
        print!("{}", draw_board(board, side));
        println!("Please input move for {side}.");

        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("\n> ");
            io::stdout().flush().context("flushing prompt")?;
            line.clear();
            let read = stdin
                .lock()
                .read_line(&mut line)
                .context("reading move from stdin")?;
            if read == 0 {
                bail!("end of input while waiting for {side}'s move");
            }
            if let Some(house) = parse_house(&line) {
                return Ok(house);
            }
        }
    }

    fn interactive(&self) -> bool {
        true
    }
}

/// Parse one prompt line as a house index in `[0, 5]`.
fn parse_house(line: &str) -> Option<usize> {
    match line.trim().parse::<usize>() {
        Ok(house) if house < NUM_HOUSES => Some(house),
        _ => None,
    }
}

/// Automated provider backed by the Monte Carlo selector.
pub struct MonteCarloProvider {
    trials: usize,
    verbose: bool,
}

impl MonteCarloProvider {
    /// `trials` playouts per decision; `verbose` dumps tallies to stderr.
    pub fn new(trials: usize, verbose: bool) -> Self {
        Self { trials, verbose }
    }
}

impl MoveProvider for MonteCarloProvider {
    fn choose(&mut self, board: &Board, side: Side) -> Result<usize> {
        let tally = run_trials(board, side, self.trials);
        if self.verbose {
            dump_tally(&tally, side);
        }
        tally
            .best_house(side)
            .or_else(|| board.first_legal(side))
            .context("no legal house to choose from")
    }
}

/// Render the board as the classic two-row box drawing.
///
/// Player 1's row reads left to right in house order on top, player 2's
/// below, with the stores on the outside edges. `whose_turn` gets its label
/// wrapped in parentheses.
pub fn draw_board(board: &Board, whose_turn: Side) -> String {
    let one: Vec<u8> = (0..NUM_HOUSES).map(|h| board.house(Side::One, h)).collect();
    let two: Vec<u8> = (0..NUM_HOUSES).map(|h| board.house(Side::Two, h)).collect();
    let label_one = if whose_turn == Side::One {
        "(PLAYER 1)"
    } else {
        " PLAYER 1 "
    };
    let label_two = if whose_turn == Side::Two {
        "(PLAYER 2)"
    } else {
        " PLAYER 2 "
    };

    let mut out = String::new();
    let _ = writeln!(out, "                   0     1     2     3     4     5");
    let _ = writeln!(
        out,
        "           /--\\  /---\\ /---\\ /---\\ /---\\ /---\\ /---\\ /--\\"
    );
    let _ = writeln!(
        out,
        "{label_one} |  |  |{:2} | |{:2} | |{:2} | |{:2} | |{:2} | |{:2} | |  |",
        one[0], one[1], one[2], one[3], one[4], one[5]
    );
    let _ = writeln!(
        out,
        "           |  |  \\---/ \\---/ \\---/ \\---/ \\---/ \\---/ |  |"
    );
    let _ = writeln!(
        out,
        "           |{:2}|                                      |{:2}|",
        board.store(Side::One),
        board.store(Side::Two)
    );
    let _ = writeln!(
        out,
        "           |  |  /---\\ /---\\ /---\\ /---\\ /---\\ /---\\ |  |"
    );
    let _ = writeln!(
        out,
        "           |  |  |{:2} | |{:2} | |{:2} | |{:2} | |{:2} | |{:2} | |  | {label_two}",
        two[0], two[1], two[2], two[3], two[4], two[5]
    );
    let _ = writeln!(
        out,
        "           \\--/  \\---/ \\---/ \\---/ \\---/ \\---/ \\---/ \\--/"
    );
    out
}

/// Alternate turns between two providers until the game ends.
///
/// Player 1 moves first. An extra turn keeps the same provider on the move.
/// An illegal choice re-prompts an interactive provider and is fatal for an
/// automated one. Returns the winning side, or `None` for a tie.
pub fn play_game<'a>(
    board: &mut Board,
    one: &'a mut dyn MoveProvider,
    two: &'a mut dyn MoveProvider,
) -> Result<Option<Side>> {
    let mut side = Side::One;

    loop {
        let provider = match side {
            Side::One => &mut *one,
            Side::Two => &mut *two,
        };
        let house = provider.choose(board, side)?;

        match play_move(board, side, house) {
            MoveOutcome::TurnOver => side = side.opponent(),
            MoveOutcome::ExtraTurn => {}
            MoveOutcome::Illegal => {
                if !provider.interactive() {
                    bail!("automated provider for {side} chose illegal house {house}");
                }
                println!("Sorry, you can't do that.");
            }
            MoveOutcome::GameOver => break,
        }
    }

    let one_store = board.store(Side::One);
    let two_store = board.store(Side::Two);
    let winner = match one_store.cmp(&two_store) {
        std::cmp::Ordering::Greater => Some(Side::One),
        std::cmp::Ordering::Less => Some(Side::Two),
        std::cmp::Ordering::Equal => None,
    };

    println!("Game over! Final board:");
    let perspective = if one_store > two_store {
        Side::One
    } else {
        Side::Two
    };
    print!("{}", draw_board(board, perspective));
    match winner {
        Some(side) => println!(
            "{side} wins, {} to {}.",
            board.store(side),
            board.store(side.opponent())
        ),
        None => println!("It's a tie, {one_store} all."),
    }

    Ok(winner)
}
