//! Tracing initialization
//!
//! Logs go to stderr so they never interleave with menu output. The filter
//! comes from `RUST_LOG`, defaulting to `warn`.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber; later calls are no-ops
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
