//! Shared HTTP client, single-request execution, and User-Agent rotation.
mod client;
mod executor;
mod user_agent;


pub use client::{ClientSettings, build_client};
pub use executor::{HttpExecutor, RequestExecutor, ResponseOutcome};
pub use user_agent::UserAgentPool;
