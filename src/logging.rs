//! Diagnostic logging for the `otk` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the program embedding it.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`. Output goes to stderr in compact
/// format so that stdout carries only command output.
///
/// ```bash
/// RUST_LOG=object_toolkit=debug otk merge a.yaml b.yaml
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
