//! Recurring growth ticker
//!
//! Accumulates wall-clock time and reports how many fixed-interval firings
//! are due, like a repeating interval timer polled from the frame loop.

use std::time::Duration;

/// Maximum firings reported per poll, so a long stall (hidden tab,
/// debugger pause) can't dump a burst of growth at once
pub const MAX_FIRINGS_PER_POLL: u32 = 8;

/// Convert a host-supplied frame delta in milliseconds
///
/// Negative, NaN, infinite or out-of-range deltas count as no elapsed time.
pub fn elapsed_from_millis(ms: f64) -> Duration {
    Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::ZERO)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowthTimer {
    interval: Duration,
    accumulator: Duration,
}

impl GrowthTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            accumulator: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add elapsed time and return the number of firings now due
    pub fn poll(&mut self, elapsed: Duration) -> u32 {
        self.accumulator = self.accumulator.saturating_add(elapsed);

        let mut fired = 0;
        while self.accumulator >= self.interval && fired < MAX_FIRINGS_PER_POLL {
            self.accumulator -= self.interval;
            fired += 1;
        }
        if fired == MAX_FIRINGS_PER_POLL {
            // Drop the backlog
            self.accumulator = Duration::ZERO;
        }
        fired
    }
}
