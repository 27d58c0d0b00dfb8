//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with sequences written to stdout.
//! Verbosity is read from `ESCAPES_LOG` (same syntax as `RUST_LOG`) and
//! defaults to warnings only.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "ESCAPES_LOG";

/// Install the global subscriber. Calling this more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    if let Err(err) = result {
        tracing::debug!(error = %err, "tracing already initialized");
    }
}
