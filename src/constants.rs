//! Constants for board geometry and engine parameters.
//!
//! The board is a ring of 14 slots visited in sowing order: player 1's
//! houses from house 5 down to house 0, player 1's store, player 2's houses
//! from house 0 up to house 5, player 2's store, and back around. Sowing is
//! a single circular walk over this ring; the only special case is that the
//! walk passes over the opponent's store.

// =============================================================================
// Board Geometry
// =============================================================================

/// Houses per side.
pub const NUM_HOUSES: usize = 6;

/// Stones in each house at game start.
pub const INITIAL_STONES: u8 = 4;

/// Every stone in play (both rows plus both stores).
pub const TOTAL_STONES: u32 = 2 * NUM_HOUSES as u32 * INITIAL_STONES as u32;

// =============================================================================
// Ring Layout
// =============================================================================

/// Slots in the sowing ring (12 houses + 2 stores).
pub const RING_SLOTS: usize = 2 * NUM_HOUSES + 2;

/// Ring slot of player 1's store.
pub const STORE_ONE: usize = NUM_HOUSES;

/// Ring slot of player 2's store.
pub const STORE_TWO: usize = RING_SLOTS - 1;

/// A house slot and its directly-opposite house slot sum to this.
pub const OPPOSITE_SUM: usize = 2 * NUM_HOUSES;

// =============================================================================
// Monte Carlo Parameters
// =============================================================================

/// Default number of random playouts per automated decision.
pub const N_TRIALS: usize = 200_000;
