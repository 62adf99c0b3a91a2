//! Mancala board representation and move execution.
//!
//! This module provides the core game logic for the Kalah variant:
//! - Board state as a 14-slot ring in sowing order
//! - Stone distribution with the opponent's store passed over
//! - Capture detection (capturing stone plus the opposite house)
//! - End-of-game detection with the final sweep into the stores
//!
//! Because the ring follows the sowing direction, distributing stones is one
//! circular walk for either mover. Player 1's houses sit at ring slots 5
//! down to 0, so a house slot and its directly-opposite house slot always
//! sum to [`OPPOSITE_SUM`].

use crate::constants::*;

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// The other side.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// 0 for player 1, 1 for player 2. Used to index per-side tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::One => write!(f, "player 1"),
            Side::Two => write!(f, "player 2"),
        }
    }
}

/// Result of attempting to play a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The turn passes to the opponent.
    TurnOver,
    /// The last stone landed in the mover's store; the mover goes again.
    ExtraTurn,
    /// Out-of-range house index or an empty house; the board is unchanged.
    Illegal,
    /// The move emptied a row; leftover stones have been swept into the
    /// stores and no further moves are legal.
    GameOver,
}

/// Ring slot of `side`'s house `house`. Callers keep `house < NUM_HOUSES`.
#[inline]
fn house_slot(side: Side, house: usize) -> usize {
    match side {
        Side::One => NUM_HOUSES - 1 - house,
        Side::Two => STORE_ONE + 1 + house,
    }
}

/// Ring slot of `side`'s store.
#[inline]
fn store_slot(side: Side) -> usize {
    match side {
        Side::One => STORE_ONE,
        Side::Two => STORE_TWO,
    }
}

/// A Mancala position.
///
/// Stone counts live in a single ring array ordered by sowing direction.
/// Only [`play_move`] and [`is_game_over`] mutate a board; the selection
/// policies and the I/O layer go through those.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pits: [u8; RING_SLOTS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Starting position: four stones in every house, both stores empty.
    pub fn new() -> Self {
        let mut pits = [INITIAL_STONES; RING_SLOTS];
        pits[STORE_ONE] = 0;
        pits[STORE_TWO] = 0;
        Board { pits }
    }

    /// Build a position from explicit rows and store counts.
    ///
    /// House arrays are in house-index order (house 0 first) for each side.
    pub fn from_parts(
        one: [u8; NUM_HOUSES],
        two: [u8; NUM_HOUSES],
        one_store: u8,
        two_store: u8,
    ) -> Self {
        let mut board = Board {
            pits: [0; RING_SLOTS],
        };
        for (house, &stones) in one.iter().enumerate() {
            board.pits[house_slot(Side::One, house)] = stones;
        }
        for (house, &stones) in two.iter().enumerate() {
            board.pits[house_slot(Side::Two, house)] = stones;
        }
        board.pits[STORE_ONE] = one_store;
        board.pits[STORE_TWO] = two_store;
        board
    }

    /// Stones in `side`'s house `house`.
    #[inline]
    pub fn house(&self, side: Side, house: usize) -> u8 {
        self.pits[house_slot(side, house)]
    }

    /// Stones in `side`'s store.
    #[inline]
    pub fn store(&self, side: Side) -> u8 {
        self.pits[store_slot(side)]
    }

    /// Sum of `side`'s six houses.
    pub fn row_sum(&self, side: Side) -> u32 {
        (0..NUM_HOUSES).map(|h| self.house(side, h) as u32).sum()
    }

    /// Every stone on the board, houses and stores both.
    pub fn total_stones(&self) -> u32 {
        self.pits.iter().map(|&s| s as u32).sum()
    }

    /// True if `side` may legally choose `house`.
    #[inline]
    pub fn is_legal(&self, side: Side, house: usize) -> bool {
        house < NUM_HOUSES && self.house(side, house) > 0
    }

    /// Lowest-index non-empty house for `side`, if any.
    pub fn first_legal(&self, side: Side) -> Option<usize> {
        (0..NUM_HOUSES).find(|&h| self.house(side, h) > 0)
    }
}

/// Play `house` for `side`, mutating the board.
///
/// All stones are lifted from the chosen house and sown one per slot along
/// the ring, passing over the opponent's store on every lap. Resolution
/// order after the last stone drops:
/// 1. In the mover's own store: extra turn (captures never apply here).
/// 2. In a previously empty house on the mover's own row, with the directly
///    opposite house non-empty: the sown stone and the opposite house are
///    captured into the mover's store, and the turn passes.
/// 3. Otherwise the turn passes.
///
/// The end-of-game check runs on every path, so a move that strips either
/// row finishes the game regardless of how the row emptied.
pub fn play_move(board: &mut Board, side: Side, house: usize) -> MoveOutcome {
    if house >= NUM_HOUSES || board.house(side, house) == 0 {
        return MoveOutcome::Illegal;
    }

    let start = house_slot(side, house);
    let mut stones = board.pits[start];
    board.pits[start] = 0;

    let skip = store_slot(side.opponent());
    let mut slot = start;
    while stones > 0 {
        slot = (slot + 1) % RING_SLOTS;
        if slot == skip {
            continue;
        }
        board.pits[slot] += 1;
        stones -= 1;
    }

    if slot == store_slot(side) {
        if is_game_over(board) {
            return MoveOutcome::GameOver;
        }
        return MoveOutcome::ExtraTurn;
    }

    let on_own_row = match side {
        Side::One => slot < STORE_ONE,
        Side::Two => slot > STORE_ONE && slot < STORE_TWO,
    };
    if on_own_row && board.pits[slot] == 1 {
        let opposite = OPPOSITE_SUM - slot;
        if board.pits[opposite] > 0 {
            let captured = board.pits[slot] + board.pits[opposite];
            board.pits[slot] = 0;
            board.pits[opposite] = 0;
            board.pits[store_slot(side)] += captured;
        }
    }

    if is_game_over(board) {
        MoveOutcome::GameOver
    } else {
        MoveOutcome::TurnOver
    }
}

/// Check for the end of the game, sweeping leftover stones into the stores.
///
/// The game ends once either row is empty; the other row's stones are
/// credited to their owner's store and every house is zeroed. Calling this
/// again on a finished board changes nothing.
pub fn is_game_over(board: &mut Board) -> bool {
    let one = board.row_sum(Side::One);
    let two = board.row_sum(Side::Two);
    if one != 0 && two != 0 {
        return false;
    }

    for house in 0..NUM_HOUSES {
        board.pits[house_slot(Side::One, house)] = 0;
        board.pits[house_slot(Side::Two, house)] = 0;
    }
    board.pits[STORE_ONE] += one as u8;
    board.pits[STORE_TWO] += two as u8;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        for side in [Side::One, Side::Two] {
            assert_eq!(board.store(side), 0);
            for house in 0..NUM_HOUSES {
                assert_eq!(board.house(side, house), INITIAL_STONES);
            }
        }
        assert_eq!(board.total_stones(), TOTAL_STONES);
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::One.opponent(), Side::Two);
        assert_eq!(Side::Two.opponent(), Side::One);
    }

    #[test]
    fn test_from_parts_accessors() {
        let board = Board::from_parts([1, 2, 3, 4, 5, 6], [6, 5, 4, 3, 2, 1], 7, 8);
        assert_eq!(board.house(Side::One, 0), 1);
        assert_eq!(board.house(Side::One, 5), 6);
        assert_eq!(board.house(Side::Two, 0), 6);
        assert_eq!(board.house(Side::Two, 5), 1);
        assert_eq!(board.store(Side::One), 7);
        assert_eq!(board.store(Side::Two), 8);
        assert_eq!(board.row_sum(Side::One), 21);
        assert_eq!(board.total_stones(), 57);
    }

    #[test]
    fn test_opening_extra_turn() {
        // Four stones from house 3 land the last one in the mover's store.
        let mut board = Board::new();
        let outcome = play_move(&mut board, Side::One, 3);
        assert_eq!(outcome, MoveOutcome::ExtraTurn);
        assert_eq!(board.store(Side::One), 1);
        assert_eq!(board.house(Side::One, 3), 0);
        assert_eq!(board.house(Side::One, 2), 5);
        assert_eq!(board.house(Side::One, 1), 5);
        assert_eq!(board.house(Side::One, 0), 5);
        assert_eq!(board.store(Side::Two), 0);
        assert_eq!(board.total_stones(), TOTAL_STONES);
    }

    #[test]
    fn test_opening_crosses_into_opponent_row() {
        // Player 2's house 5 reaches past the store into player 1's row.
        let mut board = Board::new();
        let outcome = play_move(&mut board, Side::Two, 5);
        assert_eq!(outcome, MoveOutcome::TurnOver);
        assert_eq!(board.store(Side::Two), 1);
        assert_eq!(board.house(Side::Two, 5), 0);
        assert_eq!(board.house(Side::One, 5), 5);
        assert_eq!(board.house(Side::One, 4), 5);
        assert_eq!(board.house(Side::One, 3), 5);
        assert_eq!(board.house(Side::One, 2), 4);
        assert_eq!(board.store(Side::One), 0);
    }

    #[test]
    fn test_illegal_out_of_range() {
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(play_move(&mut board, Side::One, 6), MoveOutcome::Illegal);
        assert_eq!(board, before, "board must be unchanged after an illegal move");
    }

    #[test]
    fn test_illegal_empty_house() {
        let mut board = Board::from_parts([0, 4, 4, 4, 4, 4], [4; 6], 0, 0);
        let before = board.clone();
        assert_eq!(play_move(&mut board, Side::One, 0), MoveOutcome::Illegal);
        assert_eq!(board, before);
    }

    #[test]
    fn test_store_skip_over_full_laps() {
        // 26 stones is exactly two laps over the 13 slots the mover may sow
        // into; the opponent's store must stay empty the whole way.
        let mut board = Board::from_parts([4, 4, 4, 4, 4, 26], [4; 6], 0, 0);
        let outcome = play_move(&mut board, Side::One, 5);
        assert_eq!(outcome, MoveOutcome::TurnOver);
        assert_eq!(
            board.store(Side::Two),
            0,
            "opponent store must never receive a stone"
        );
        assert_eq!(board.store(Side::One), 2, "own store gains one per lap");
        assert_eq!(board.house(Side::One, 5), 2);
        assert_eq!(board.house(Side::Two, 0), 6);
    }

    #[test]
    fn test_full_lap_lands_in_emptied_house_and_captures() {
        // 13 stones sow one full lap and drop the last stone back into the
        // starting house, now otherwise empty: that is a capture.
        let mut board = Board::from_parts([4, 4, 4, 4, 4, 13], [4; 6], 0, 0);
        let outcome = play_move(&mut board, Side::One, 5);
        assert_eq!(outcome, MoveOutcome::TurnOver);
        assert_eq!(board.house(Side::One, 5), 0);
        assert_eq!(board.house(Side::Two, 5), 0);
        assert_eq!(board.store(Side::One), 7, "1 sown + 5 opposite + 1 capturing");
        assert_eq!(board.store(Side::Two), 0);
    }

    #[test]
    fn test_capture_takes_both_houses() {
        // One stone from house 1 lands in empty house 0; player 2's house 0
        // holds five stones; all six go to player 1's store.
        let mut board = Board::from_parts([0, 1, 0, 0, 0, 3], [5, 0, 0, 0, 0, 2], 10, 9);
        let outcome = play_move(&mut board, Side::One, 1);
        assert_eq!(
            outcome,
            MoveOutcome::TurnOver,
            "capture does not grant an extra turn"
        );
        assert_eq!(board.house(Side::One, 0), 0);
        assert_eq!(board.house(Side::Two, 0), 0);
        assert_eq!(board.store(Side::One), 16);
        assert_eq!(board.store(Side::Two), 9);
    }

    #[test]
    fn test_no_capture_when_opposite_empty() {
        let mut board = Board::from_parts([0, 1, 0, 0, 0, 3], [0, 0, 0, 0, 0, 2], 0, 0);
        let outcome = play_move(&mut board, Side::One, 1);
        assert_eq!(outcome, MoveOutcome::TurnOver);
        assert_eq!(board.house(Side::One, 0), 1, "the sown stone stays put");
        assert_eq!(board.store(Side::One), 0);
    }

    #[test]
    fn test_no_capture_into_occupied_house() {
        let mut board = Board::from_parts([2, 1, 0, 0, 0, 3], [5, 0, 0, 0, 0, 2], 0, 0);
        let outcome = play_move(&mut board, Side::One, 1);
        assert_eq!(outcome, MoveOutcome::TurnOver);
        assert_eq!(board.house(Side::One, 0), 3);
        assert_eq!(board.house(Side::Two, 0), 5);
        assert_eq!(board.store(Side::One), 0);
    }

    #[test]
    fn test_no_capture_on_opponent_row() {
        // The last stone lands in an empty house on the opponent's row;
        // only own-row landings capture.
        let mut board = Board::from_parts([2, 0, 0, 0, 0, 1], [0, 3, 0, 0, 0, 0], 0, 0);
        let outcome = play_move(&mut board, Side::One, 0);
        assert_eq!(outcome, MoveOutcome::TurnOver);
        assert_eq!(
            board.house(Side::Two, 0),
            1,
            "stone stays in the opponent's house"
        );
        assert_eq!(board.store(Side::One), 1);
    }

    #[test]
    fn test_terminal_sweep() {
        // The move empties the mover's row; the opponent's leftovers are
        // swept into the opponent's store.
        let mut board = Board::from_parts([1, 0, 0, 0, 0, 0], [3, 0, 2, 0, 0, 0], 20, 15);
        let outcome = play_move(&mut board, Side::One, 0);
        assert_eq!(outcome, MoveOutcome::GameOver);
        assert_eq!(board.store(Side::One), 21);
        assert_eq!(board.store(Side::Two), 20);
        assert_eq!(board.row_sum(Side::One), 0);
        assert_eq!(board.row_sum(Side::Two), 0);

        // Repeating the terminal check is a no-op.
        let after = board.clone();
        assert!(is_game_over(&mut board));
        assert_eq!(board, after);
    }

    #[test]
    fn test_capture_can_end_game() {
        // A capture that strips the opponent's last stones triggers the
        // sweep even though the mover never touched the rest of that row.
        let mut board = Board::from_parts([0, 1, 0, 0, 0, 2], [6, 0, 0, 0, 0, 0], 0, 0);
        let outcome = play_move(&mut board, Side::One, 1);
        assert_eq!(outcome, MoveOutcome::GameOver);
        assert_eq!(board.store(Side::One), 9);
        assert_eq!(board.store(Side::Two), 0);
        assert_eq!(board.row_sum(Side::One) + board.row_sum(Side::Two), 0);
    }

    #[test]
    fn test_conservation_over_scripted_moves() {
        let mut board = Board::new();
        let mut side = Side::One;
        for house in [2, 5, 0, 3, 1, 4, 2, 0] {
            match play_move(&mut board, side, house) {
                MoveOutcome::TurnOver => side = side.opponent(),
                MoveOutcome::ExtraTurn | MoveOutcome::Illegal => {}
                MoveOutcome::GameOver => break,
            }
            assert_eq!(board.total_stones(), TOTAL_STONES);
        }
    }
}
