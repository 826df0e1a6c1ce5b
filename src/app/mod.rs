mod controller;
mod pool;
mod progress;
mod settings;
pub(crate) mod summary;


pub use controller::{LoadTestController, RunOutcome};
pub use pool::{WorkerPool, WorkerShared};
pub use progress::{
    NullSink, ReporterSettings, StatusLine, StatusReporter, StatusSink, TerminalSink,
};
pub use settings::LoadTestConfig;
