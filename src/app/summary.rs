use crate::metrics::RunSummary;

const PERCENT_DIVISOR: u64 = 100;

#[must_use]
pub(crate) fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let avg_rps_x100 = summary.avg_rps_x100();
    let success_rate_x100 = summary.success_rate_x100();

    let mut lines = Vec::new();
    lines.push(format!("Duration: {}s", summary.window.as_secs()));
    lines.push(format!("Total Requests: {}", summary.total_requests()));
    lines.push(format!(
        "Successful: {} ({}.{:02}%)",
        summary.successful_requests(),
        success_rate_x100 / PERCENT_DIVISOR,
        success_rate_x100 % PERCENT_DIVISOR
    ));
    lines.push(format!("Errors: {}", summary.failed_requests()));
    lines.push(format!(
        "Avg RPS: {}.{:02}",
        avg_rps_x100 / PERCENT_DIVISOR,
        avg_rps_x100 % PERCENT_DIVISOR
    ));
    if summary.interrupted {
        lines.push(format!(
            "Run interrupted after {}ms",
            summary.window.as_millis()
        ));
    }
    lines
}

pub(crate) fn print_summary(summary: &RunSummary) {
    println!("Shutting down workers...");
    for line in summary_lines(summary) {
        println!("{}", line);
    }
}
