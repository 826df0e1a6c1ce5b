//! Lock-free request counters and the end-of-run summary.
mod counters;
mod summary;

#[cfg(test)]
mod tests;

pub use counters::{CounterSnapshot, Counters};
pub use summary::RunSummary;
