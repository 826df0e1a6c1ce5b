mod support_single;

use std::time::Duration;

use ccload::app::{LoadTestConfig, LoadTestController, NullSink};
use ccload::error::{AppError, AppResult};

use support_single::{refused_url, spawn_http_server};

fn run_blocking<F>(future: F) -> AppResult<ccload::metrics::RunSummary>
where
    F: std::future::Future<Output = AppResult<ccload::metrics::RunSummary>>,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    runtime.block_on(future)
}

fn test_error(message: String) -> AppError {
    AppError::from(std::io::Error::other(message))
}

#[test]
fn e2e_controller_healthy_target() -> AppResult<()> {
    let (url, _server) = spawn_http_server().map_err(test_error)?;
    let config = LoadTestConfig::new(&url, 4, 1)?.with_wait_ongoing(true);

    let summary = run_blocking(async move {
        let controller = LoadTestController::new(config)?;
        Ok(controller.run(NullSink).await?.summary)
    })?;

    if summary.successful_requests() == 0 {
        return Err(test_error(format!("No successful requests: {:?}", summary)));
    }
    if !summary.counters.is_settled() {
        return Err(test_error(format!("Counters not settled: {:?}", summary)));
    }
    if summary.window != Duration::from_secs(1) {
        return Err(test_error(format!("Unexpected window: {:?}", summary.window)));
    }
    Ok(())
}

#[test]
fn e2e_controller_refused_target() -> AppResult<()> {
    let url = refused_url().map_err(test_error)?;
    let config = LoadTestConfig::new(&url, 2, 1)?.with_wait_ongoing(true);

    let summary = run_blocking(async move {
        let controller = LoadTestController::new(config)?;
        Ok(controller.run(NullSink).await?.summary)
    })?;

    if summary.total_requests() == 0 {
        return Err(test_error("Workers never ran".to_owned()));
    }
    if summary.successful_requests() != 0 || summary.failed_requests() != summary.total_requests()
    {
        return Err(test_error(format!("Expected only errors: {:?}", summary)));
    }
    Ok(())
}
