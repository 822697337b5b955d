//! Structured diagnostic logging

use tracing_subscriber::EnvFilter;

/// Install the global JSON log subscriber.
///
/// Diagnostics are written to stderr so that stdout stays reserved for the
/// rendered template output. The level defaults to debug and can be changed
/// through `RUST_LOG`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
