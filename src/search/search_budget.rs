//! Wall-clock budget shared by every frame of one search.

use std::time::{Duration, Instant};

/// Start time plus allotted duration. Created once per top-level call and
/// only ever read afterwards.
#[derive(Debug, Clone, Copy)]
pub struct SearchBudget {
    started_at: Instant,
    allotted: Duration,
    deadline: Option<Instant>,
}

impl SearchBudget {
    pub fn starting_now(allotted: Duration) -> Self {
        let started_at = Instant::now();
        Self {
            started_at,
            allotted,
            // Saturates to "no deadline" for durations the clock cannot represent.
            deadline: started_at.checked_add(allotted),
        }
    }

    pub fn unlimited() -> Self {
        Self::starting_now(Duration::MAX)
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        match self.deadline {
            Some(limit) => Instant::now() >= limit,
            None => false,
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    #[inline]
    pub fn allotted(&self) -> Duration {
        self.allotted
    }
}
