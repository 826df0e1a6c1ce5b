use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use reqwest::Url;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::error::HttpError;
use crate::http::{RequestExecutor, UserAgentPool};
use crate::metrics::Counters;
use crate::shutdown::{ShutdownListener, ShutdownSignal};

/// State every worker reads; shared behind one `Arc`.
pub struct WorkerShared<E> {
    pub url: Url,
    pub executor: Arc<E>,
    pub counters: Arc<Counters>,
    pub user_agents: UserAgentPool,
}

/// Fixed set of request loops started together and stopped by one signal.
#[derive(Debug)]
pub struct WorkerPool {
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawns exactly `workers` request loops on the current tokio runtime.
    #[must_use]
    pub fn start<E>(
        workers: usize,
        shared: &Arc<WorkerShared<E>>,
        signal: &ShutdownSignal,
    ) -> Self
    where
        E: RequestExecutor,
    {
        let mut handles = Vec::with_capacity(workers);
        for _ in 0..workers {
            let shared = Arc::clone(shared);
            let listener = signal.subscribe();
            handles.push(tokio::spawn(run_worker(shared, listener)));
        }
        Self { handles }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Waits for every worker to leave its loop.
    ///
    /// Returns how many workers ended abnormally (cancelled or panicked
    /// outside a request attempt).
    pub async fn join(self) -> usize {
        let mut failed: usize = 0;
        for handle in self.handles {
            if let Err(err) = handle.await {
                warn!("Worker ended abnormally: {}", err);
                failed = failed.saturating_add(1);
            }
        }
        failed
    }
}

async fn run_worker<E>(shared: Arc<WorkerShared<E>>, listener: ShutdownListener)
where
    E: RequestExecutor,
{
    loop {
        if listener.is_triggered() {
            break;
        }

        let user_agent = shared.user_agents.pick();
        let attempt = AssertUnwindSafe(shared.executor.execute(&shared.url, user_agent))
            .catch_unwind()
            .await
            .unwrap_or_else(|_panic| Err(HttpError::AttemptPanicked));

        shared.counters.increment_total();
        match attempt {
            Ok(_outcome) => shared.counters.increment_success(),
            Err(_request_error) => shared.counters.increment_error(),
        }

        // Executors that fail fast never reach a pending await otherwise.
        tokio::task::yield_now().await;
    }
}
