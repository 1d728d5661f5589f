//! Installs the `tracing` subscriber for the binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Logs go to stderr so they never mix with game output on stdout.
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}
