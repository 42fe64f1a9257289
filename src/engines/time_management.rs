//! Per-move time budgeting.
//!
//! The driver passes the player's remaining clock; the strategy decides how
//! much of it one move may spend. Search headroom for later moves and engine
//! overhead comes out of what is not allotted here.

use std::time::Duration;

use crate::game_state::game_engine::GameEngineState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeManagementStrategy {
    /// Spend `remaining / divisor` on this move.
    FractionOfRemaining { divisor: u32 },
    /// Keep a small reserve and split the rest over this player's remaining
    /// placements, never more than a quarter of the clock.
    PliesRemaining,
    /// Fixed per-move allowance, clipped to the remaining clock.
    FixedMillis(u64),
    /// Whole clock minus the safety reserve. Pairs with a depth cap, which
    /// usually ends the search first.
    RemainingClock,
}

impl Default for TimeManagementStrategy {
    fn default() -> Self {
        TimeManagementStrategy::FractionOfRemaining { divisor: 5 }
    }
}

impl TimeManagementStrategy {
    pub fn per_move_budget<S: GameEngineState>(&self, state: &S, remaining: Duration) -> Duration {
        match *self {
            TimeManagementStrategy::FractionOfRemaining { divisor } => remaining / divisor.max(1),
            TimeManagementStrategy::PliesRemaining => plies_remaining_budget(state, remaining),
            TimeManagementStrategy::FixedMillis(ms) => Duration::from_millis(ms).min(remaining),
            TimeManagementStrategy::RemainingClock => {
                remaining.saturating_sub(clock_reserve(remaining))
            }
        }
    }
}

/// A 1/25 slice of the clock, or up to 100ms (never more than half) on short clocks.
fn clock_reserve(remaining: Duration) -> Duration {
    (remaining / 25).max((remaining / 2).min(Duration::from_millis(100)))
}

fn plies_remaining_budget<S: GameEngineState>(state: &S, remaining: Duration) -> Duration {
    let own_plies = state
        .remaining_inventory(state.side_to_move())
        .total()
        .max(1);

    let usable = remaining.saturating_sub(clock_reserve(remaining));
    let base = usable / own_plies;

    base.min(remaining / 4)
}
