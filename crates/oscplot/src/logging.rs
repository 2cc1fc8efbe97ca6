//! Diagnostic logging.
//!
//! Logs go to stderr so they never mix with chart or export output on
//! stdout. `RUST_LOG` takes precedence over the `-v` count.

use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Builds the filter for a verbosity level, honoring `RUST_LOG` when set.
pub fn filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
}

/// Installs the global subscriber.
///
/// Returns `false` if a subscriber was already installed (as happens when
/// tests call this more than once).
pub fn init(level: LogLevel) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
