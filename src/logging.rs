//! logging
//!
//! Tracing subscriber setup for the `subway` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! binary's job. Logs go to stderr so stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `level` is the base filter for this crate; `RUST_LOG` overrides it.
/// Calling this more than once is harmless: later calls are ignored.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init();
}

fn default_directive(level: &str) -> String {
    format!("warn,subwayline={level}")
}
