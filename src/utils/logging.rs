// ============================================================================
// Logging Setup
// Subscriber installation for binaries and demos (feature = "logging")
// ============================================================================
//
// The library itself only emits `tracing` events (trace/debug level) and
// never installs a subscriber. Applications that want to see them call
// `init_logging` once at startup.

use tracing_subscriber::EnvFilter;

/// Install a global formatting subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise `default_filter`
/// (e.g. `"exact_arith=trace"`) is used.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
