use std::time::Duration;

use super::CounterSnapshot;

/// Final counters of a run paired with the window they were collected over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub counters: CounterSnapshot,
    pub window: Duration,
    pub interrupted: bool,
}

impl RunSummary {
    #[must_use]
    pub const fn new(counters: CounterSnapshot, window: Duration, interrupted: bool) -> Self {
        Self {
            counters,
            window,
            interrupted,
        }
    }

    #[must_use]
    pub const fn total_requests(&self) -> u64 {
        self.counters.total
    }

    #[must_use]
    pub const fn successful_requests(&self) -> u64 {
        self.counters.success
    }

    #[must_use]
    pub const fn failed_requests(&self) -> u64 {
        self.counters.errors
    }

    /// Average requests per second scaled by 100, i.e. `12345` is `123.45`.
    ///
    /// A zero-length window yields 0.
    #[must_use]
    pub fn avg_rps_x100(&self) -> u64 {
        let window_ms = self.window.as_millis();
        let scaled = u128::from(self.counters.total)
            .saturating_mul(100_000)
            .checked_div(window_ms)
            .unwrap_or(0);
        u64::try_from(scaled).unwrap_or(u64::MAX)
    }

    /// Success share scaled by 100, i.e. `9950` is `99.50%`.
    #[must_use]
    pub fn success_rate_x100(&self) -> u64 {
        let scaled = u128::from(self.counters.success)
            .saturating_mul(10_000)
            .checked_div(u128::from(self.counters.total))
            .unwrap_or(0);
        u64::try_from(scaled).unwrap_or(u64::MAX)
    }
}
