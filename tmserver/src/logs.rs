//! Logging bootstrap
//!
//! One fmt subscriber for the whole process, filtered through `RUST_LOG`
//! with an `info` default.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber
///
/// Call once, before anything logs. Panics if a global subscriber is
/// already installed.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
