#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tracing::{info, warn};

/// Resolves on the first Ctrl+C or, on unix, SIGTERM.
///
/// Only ends the controller's wait early; the controller still sends the
/// single stop signal itself.
pub async fn wait_for_interrupt() {
    #[cfg(unix)]
    {
        let mut term_signal = match signal(SignalKind::terminate()) {
            Ok(signal) => Some(signal),
            Err(err) => {
                warn!("Failed to register SIGTERM handler: {}", err);
                None
            }
        };

        tokio::select! {
            () = ctrl_c() => {}
            () = async {
                if let Some(signal) = term_signal.as_mut() {
                    signal.recv().await;
                } else {
                    std::future::pending::<()>().await;
                }
            } => {
                info!("Received SIGTERM, stopping early");
            }
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c().await;
    }
}

/// Waits for Ctrl+C; never resolves when the handler cannot be installed.
async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, stopping early"),
        Err(err) => {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    }
}
