pub mod analytics;
pub mod client;
pub mod config;
pub mod types;

use tracing_subscriber::EnvFilter;

/// Initialize structured logging with tracing.
/// Respects RUST_LOG env var; defaults to `info` level for the hookwatch crate.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hookwatch=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
