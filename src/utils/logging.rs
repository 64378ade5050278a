// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Our own progress at INFO; reqwest/hyper chatter only when it is a warning.
const DEFAULT_DIRECTIVES: &str = "warn,volby_scraper=info";

fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(DEFAULT_DIRECTIVES),
    }
}

/// Sets up the logging framework using tracing_subscriber.
/// `RUST_LOG` overrides the default per-crate levels.
/// Logs go to stderr; stdout carries only the user-facing progress and saved-file lines.
pub fn setup_logging() {
    let rust_log = std::env::var("RUST_LOG").ok();

    fmt()
        .with_env_filter(env_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Logging setup complete.");
}
