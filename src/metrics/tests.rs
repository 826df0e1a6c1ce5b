use super::*;
use std::sync::Arc;
use std::time::Duration;

const CONCURRENT_INCREMENTERS: usize = 1000;

fn snapshot(total: u64, success: u64, errors: u64) -> CounterSnapshot {
    CounterSnapshot {
        total,
        success,
        errors,
    }
}

#[test]
fn concurrent_increments_are_not_lost() -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(4)
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;

    let counters = Arc::new(Counters::new());
    runtime.block_on(async {
        let mut handles = Vec::with_capacity(CONCURRENT_INCREMENTERS);
        for idx in 0..CONCURRENT_INCREMENTERS {
            let counters = Arc::clone(&counters);
            handles.push(tokio::spawn(async move {
                counters.increment_total();
                if idx % 3 == 0 {
                    counters.increment_error();
                } else {
                    counters.increment_success();
                }
            }));
        }
        for handle in handles {
            handle
                .await
                .map_err(|err| format!("Incrementer panicked: {}", err))?;
        }
        Ok::<(), String>(())
    })?;

    let snap = counters.snapshot();
    let expected = u64::try_from(CONCURRENT_INCREMENTERS).map_err(|err| err.to_string())?;
    if snap.total != expected {
        return Err(format!("Expected total {}, got {}", expected, snap.total));
    }
    if snap.success.saturating_add(snap.errors) != snap.total {
        return Err(format!("Unsettled snapshot: {:?}", snap));
    }
    if snap.errors != 334 {
        return Err(format!("Expected 334 errors, got {}", snap.errors));
    }
    Ok(())
}

#[test]
fn snapshot_reports_pending_outcomes() -> Result<(), String> {
    let counters = Counters::new();
    counters.increment_total();
    counters.increment_total();
    counters.increment_success();

    let snap = counters.snapshot();
    if snap.pending() != 1 || snap.is_settled() {
        return Err(format!("Expected one pending outcome, got {:?}", snap));
    }

    counters.increment_error();
    if !counters.snapshot().is_settled() {
        return Err("Snapshot should be settled".to_owned());
    }
    Ok(())
}

#[test]
fn avg_rps_matches_total_over_window() -> Result<(), String> {
    let summary = RunSummary::new(snapshot(1234, 1200, 34), Duration::from_secs(10), false);
    if summary.avg_rps_x100() != 12_340 {
        return Err(format!("Unexpected avg rps: {}", summary.avg_rps_x100()));
    }

    let uneven = RunSummary::new(snapshot(10, 10, 0), Duration::from_secs(3), false);
    if uneven.avg_rps_x100() != 333 {
        return Err(format!("Unexpected avg rps: {}", uneven.avg_rps_x100()));
    }
    Ok(())
}

#[test]
fn avg_rps_with_zero_window_is_zero() -> Result<(), String> {
    let summary = RunSummary::new(snapshot(500, 500, 0), Duration::ZERO, false);
    if summary.avg_rps_x100() != 0 {
        return Err(format!("Expected 0, got {}", summary.avg_rps_x100()));
    }
    Ok(())
}

#[test]
fn success_rate_handles_empty_run() -> Result<(), String> {
    let empty = RunSummary::new(CounterSnapshot::default(), Duration::from_secs(1), false);
    if empty.success_rate_x100() != 0 {
        return Err("Empty run should have 0% success".to_owned());
    }

    let mixed = RunSummary::new(snapshot(8, 6, 2), Duration::from_secs(1), false);
    if mixed.success_rate_x100() != 7_500 {
        return Err(format!(
            "Expected 75.00%, got {}",
            mixed.success_rate_x100()
        ));
    }
    Ok(())
}
