//! Observability for clinicdesk
//!
//! Structured logging through `tracing`. Library code only emits events;
//! the binary installs the subscriber via [`init_logging`].
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on query results
//! 3. Logs go to stderr; stdout carries responses only

mod events;

pub use events::Event;

/// Accepted log levels
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Returns true if `level` is an accepted log level
pub fn is_valid_level(level: &str) -> bool {
    LOG_LEVELS.contains(&level)
}

/// Builds the default filter directive for a level
pub fn filter_directive(level: &str) -> String {
    format!("clinicdesk={}", level)
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Calling this twice is harmless;
/// the second install is ignored.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
