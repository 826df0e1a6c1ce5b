use std::future::Future;
use std::sync::Arc;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::pool::{WorkerPool, WorkerShared};
use super::progress::{ReporterSettings, StatusReporter, StatusSink};
use super::settings::LoadTestConfig;
use crate::error::AppResult;
use crate::http::{HttpExecutor, RequestExecutor};
use crate::metrics::{Counters, RunSummary};
use crate::shutdown::{ShutdownListener, ShutdownSignal};

/// What a finished run hands back: the summary and the status sink, so the
/// caller can keep writing to the same output.
#[derive(Debug)]
pub struct RunOutcome<S> {
    pub summary: RunSummary,
    pub sink: S,
}

/// Drives one fixed-duration run: reporter and workers up, sleep, one stop
/// signal, final snapshot.
pub struct LoadTestController<E = HttpExecutor> {
    config: LoadTestConfig,
    executor: Arc<E>,
    counters: Arc<Counters>,
    signal: ShutdownSignal,
}

impl LoadTestController<HttpExecutor> {
    /// Builds the shared HTTP client for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn new(config: LoadTestConfig) -> AppResult<Self> {
        let executor = HttpExecutor::new(config.client())?;
        Ok(Self::with_executor(config, executor))
    }
}

impl<E> LoadTestController<E>
where
    E: RequestExecutor,
{
    #[must_use]
    pub fn with_executor(config: LoadTestConfig, executor: E) -> Self {
        Self {
            config,
            executor: Arc::new(executor),
            counters: Arc::new(Counters::new()),
            signal: ShutdownSignal::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &LoadTestConfig {
        &self.config
    }

    #[must_use]
    pub fn counters(&self) -> Arc<Counters> {
        Arc::clone(&self.counters)
    }

    #[must_use]
    pub fn shutdown_listener(&self) -> ShutdownListener {
        self.signal.subscribe()
    }

    /// Runs for the configured duration.
    ///
    /// # Errors
    ///
    /// Returns an error when the reporter task fails to join.
    pub async fn run<S>(self, sink: S) -> AppResult<RunOutcome<S>>
    where
        S: StatusSink,
    {
        self.run_until(sink, std::future::pending::<()>()).await
    }

    /// Runs for the configured duration or until `interrupt` resolves,
    /// whichever comes first.
    ///
    /// # Errors
    ///
    /// Returns an error when the reporter task fails to join.
    pub async fn run_until<S, F>(self, sink: S, interrupt: F) -> AppResult<RunOutcome<S>>
    where
        S: StatusSink,
        F: Future<Output = ()>,
    {
        let workers = self.config.workers();
        let duration = self.config.duration();
        info!(
            "Starting load test: {} workers against {} for {}s",
            workers,
            self.config.url(),
            duration.as_secs()
        );

        let started = Instant::now();
        let reporter = StatusReporter::spawn(
            ReporterSettings {
                workers,
                interval: self.config.report_interval(),
            },
            Arc::clone(&self.counters),
            self.signal.subscribe(),
            sink,
        );

        let shared = Arc::new(WorkerShared {
            url: self.config.url().clone(),
            executor: Arc::clone(&self.executor),
            counters: Arc::clone(&self.counters),
            user_agents: self.config.user_agents().clone(),
        });
        let pool = WorkerPool::start(workers, &shared, &self.signal);
        debug!("Spawned {} workers", pool.len());

        let interrupted = tokio::select! {
            () = tokio::time::sleep(duration) => false,
            () = interrupt => true,
        };
        let window = if interrupted {
            started.elapsed()
        } else {
            duration
        };

        self.signal.trigger();
        info!("Stop signal sent to {} workers", workers);

        let returned_sink = reporter.await?;

        if self.config.wait_ongoing() {
            let abnormal = pool.join().await;
            if abnormal > 0 {
                warn!("{} workers did not stop cleanly", abnormal);
            }
        } else {
            // Detached workers exit on their next loop check.
            drop(pool);
        }

        let summary = RunSummary::new(self.counters.snapshot(), window, interrupted);
        info!(
            "Load test finished: {} requests ({} ok, {} errors)",
            summary.total_requests(),
            summary.successful_requests(),
            summary.failed_requests()
        );
        Ok(RunOutcome {
            summary,
            sink: returned_sink,
        })
    }
}
