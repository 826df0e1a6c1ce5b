//! Core library for the `ccload` CLI.
//!
//! `ccload` fires unthrottled GET requests at one URL from a fixed pool of
//! concurrent workers for a fixed duration, then reports throughput. The
//! binary is a thin wrapper over [`entry::run`]; [`app::LoadTestController`]
//! drives a run programmatically.
pub mod app;
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod metrics;
pub mod shutdown;
pub mod system;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
