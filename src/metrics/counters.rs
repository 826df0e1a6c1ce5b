use std::sync::atomic::{AtomicU64, Ordering};

/// Shared request tallies for one run.
///
/// Every field is its own atomic; increments never contend on a lock and a
/// snapshot loads each field independently.
#[derive(Debug, Default)]
pub struct Counters {
    total: AtomicU64,
    success: AtomicU64,
    errors: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub total: u64,
    pub success: u64,
    pub errors: u64,
}

impl Counters {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: AtomicU64::new(0),
            success: AtomicU64::new(0),
            errors: AtomicU64::new(0),
        }
    }

    pub fn increment_total(&self) {
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_success(&self) {
        self.success.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Reads the three counters one after another.
    ///
    /// Mid-run the total may be ahead of `success + errors`; the fields only
    /// agree once every worker has stopped.
    #[must_use]
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            total: self.total.load(Ordering::Relaxed),
            success: self.success.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

impl CounterSnapshot {
    /// Requests counted in `total` whose outcome has not been recorded yet.
    #[must_use]
    pub const fn pending(&self) -> u64 {
        self.total
            .saturating_sub(self.success.saturating_add(self.errors))
    }

    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.pending() == 0
    }
}
