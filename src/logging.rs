//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout stays reserved for the report. `VETTED_LOG`
//! takes an `EnvFilter` directive (e.g. `vetted=debug`) and wins over `-v`.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "VETTED_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
