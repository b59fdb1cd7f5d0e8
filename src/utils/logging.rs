//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Setup logging for the file manager
///
/// Records go to stderr so they never interleave with the menu on stdout.
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format_timestamp_millis()
        .init();
}
