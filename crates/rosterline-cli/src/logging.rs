//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout carries only command output. `log` records
//! from the library crates are bridged into the subscriber.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive: `-v` forces debug, otherwise the configured
/// base level. `RUST_LOG` still overrides either.
pub fn default_directive(base_level: &str, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        base_level.to_lowercase()
    }
}

/// Install the global subscriber.
pub fn init(base_level: &str, verbose: bool) {
    let directive = default_directive(base_level, verbose);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive)),
        )
        .with_writer(std::io::stderr)
        .init();
}
