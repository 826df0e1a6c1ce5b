use std::io::{IsTerminal, Write};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::warn;

use crate::metrics::{CounterSnapshot, Counters};
use crate::shutdown::ShutdownListener;

/// One rendered tick of the live status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub workers: usize,
    pub elapsed_secs: u64,
    pub interval_requests: u64,
    pub rps: u64,
    pub counters: CounterSnapshot,
}

impl StatusLine {
    #[must_use]
    pub fn new(
        workers: usize,
        elapsed: Duration,
        interval_requests: u64,
        interval: Duration,
        counters: CounterSnapshot,
    ) -> Self {
        let interval_ms = interval.as_millis();
        let rps = u128::from(interval_requests)
            .saturating_mul(1000)
            .checked_div(interval_ms)
            .unwrap_or(0);
        Self {
            workers,
            elapsed_secs: elapsed.as_secs(),
            interval_requests,
            rps: u64::try_from(rps).unwrap_or(u64::MAX),
            counters,
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "workers: {} | time: {}s | RPS: {}/s | Total: {} | Success: {} | Errors: {}",
            self.workers,
            self.elapsed_secs,
            self.rps,
            self.counters.total,
            self.counters.success,
            self.counters.errors
        )
    }
}

/// Destination for status lines.
pub trait StatusSink: Send + 'static {
    /// # Errors
    ///
    /// Returns an error when the line cannot be written.
    fn render(&mut self, line: &StatusLine) -> std::io::Result<()>;

    /// Called once after the last line, when the run stops.
    ///
    /// # Errors
    ///
    /// Returns an error when the output cannot be finalised.
    fn finish(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Rewrites a single stdout line in place, or prints one line per tick when
/// stdout is not a terminal.
#[derive(Debug, Clone, Copy)]
pub struct TerminalSink {
    no_color: bool,
    in_place: bool,
}

impl TerminalSink {
    #[must_use]
    pub fn stdout(no_color: bool) -> Self {
        Self {
            no_color,
            in_place: std::io::stdout().is_terminal(),
        }
    }
}

impl StatusSink for TerminalSink {
    fn render(&mut self, line: &StatusLine) -> std::io::Result<()> {
        let text = line.render();
        let mut out = std::io::stdout().lock();
        if !self.in_place {
            writeln!(out, "{}", text)?;
            return out.flush();
        }

        queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        if self.no_color {
            queue!(out, Print(&text))?;
        } else {
            queue!(
                out,
                SetForegroundColor(Color::Cyan),
                SetAttribute(Attribute::Bold),
                Print(&text),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        out.flush()
    }

    fn finish(&mut self) -> std::io::Result<()> {
        if !self.in_place {
            return Ok(());
        }
        let mut out = std::io::stdout().lock();
        out.write_all(b"\n")?;
        out.flush()
    }
}

/// Discards every line; used with `--quiet`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl StatusSink for NullSink {
    fn render(&mut self, _line: &StatusLine) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReporterSettings {
    pub workers: usize,
    pub interval: Duration,
}

/// Periodic sampler of the shared counters.
pub struct StatusReporter;

impl StatusReporter {
    /// Spawns the reporter task. The task hands the sink back once the
    /// shutdown signal fires.
    ///
    /// `settings.interval` must be non-zero; [`crate::app::LoadTestConfig`]
    /// guarantees it.
    #[must_use]
    pub fn spawn<S>(
        settings: ReporterSettings,
        counters: Arc<Counters>,
        listener: ShutdownListener,
        sink: S,
    ) -> JoinHandle<S>
    where
        S: StatusSink,
    {
        tokio::spawn(run_reporter(settings, counters, listener, sink))
    }
}

async fn run_reporter<S>(
    settings: ReporterSettings,
    counters: Arc<Counters>,
    mut listener: ShutdownListener,
    mut sink: S,
) -> S
where
    S: StatusSink,
{
    let started = Instant::now();
    let first_tick = started.checked_add(settings.interval).unwrap_or(started);
    let mut ticker = interval_at(first_tick, settings.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_total: u64 = 0;

    loop {
        tokio::select! {
            biased;
            () = listener.wait() => break,
            _ = ticker.tick() => {
                let snapshot = counters.snapshot();
                let interval_requests = snapshot.total.saturating_sub(last_total);
                last_total = snapshot.total;
                let line = StatusLine::new(
                    settings.workers,
                    started.elapsed(),
                    interval_requests,
                    settings.interval,
                    snapshot,
                );
                if let Err(err) = sink.render(&line) {
                    warn!("Failed to render status line: {}", err);
                    break;
                }
            }
        }
    }

    if let Err(err) = sink.finish() {
        warn!("Failed to finish status line: {}", err);
    }
    sink
}
