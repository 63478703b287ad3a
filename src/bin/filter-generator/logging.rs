//! Logging setup using `tracing-subscriber`.
//!
//! Logs go to stderr so the preview printed on stdout stays clean.
//!
//! - `error`: files that could not be read or written
//! - `warn`: empty word lists, a missing word list replaced by the example
//! - `info`: files loaded and saved
//! - `debug`: every generated pattern

use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Level used when neither a flag nor `RUST_LOG` selects one.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Builds the filter: an explicit `level` wins, then `RUST_LOG`, then [`DEFAULT_LEVEL`].
fn build_env_filter(level: Option<LevelFilter>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL.to_string())),
    }
}

/// Initializes the global subscriber.
///
/// Must be called once, before anything is logged.
pub fn init_logging(level: Option<LevelFilter>) {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(level))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .compact()
        .init();
}
