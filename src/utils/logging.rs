//! Logging initialization
//!
//! Respects the RUST_LOG environment variable, falls back to an explicit
//! filter or "info". The engine itself only emits `tracing` events and
//! works correctly with no subscriber installed.

use tracing_subscriber::EnvFilter;

/// Initialize logging for the CLI
///
/// RUST_LOG always takes precedence; otherwise the provided filter (or
/// "info") applies.
pub fn init_logging(filter: Option<&str>) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(filter.unwrap_or("info"))
    };

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
