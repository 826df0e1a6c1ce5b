use tracing_subscriber::{EnvFilter, FmtSubscriber};

const LOG_ENV_VARS: [&str; 2] = ["CCLOAD_LOG", "RUST_LOG"];

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    LOG_ENV_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok())
        .map_or_else(
            || default_filter(verbose),
            |value| EnvFilter::try_new(value).unwrap_or_else(|_invalid| EnvFilter::new("info")),
        )
}

/// Installs the global subscriber. Logs go to stderr so the status line and
/// summary own stdout.
pub fn init_logging(verbose: bool, no_color: bool) {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter(verbose))
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}
