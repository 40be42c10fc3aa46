//! Tracing setup for the binary.
//!
//! Logs go to stderr so stdout carries nothing but the box office transcript.

use crate::config::LoggingConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// An invalid filter directive falls back to `warn` and is reported once the
/// subscriber is up.
pub fn init(config: &LoggingConfig) {
    let (filter, rejected) = match EnvFilter::try_new(&config.filter) {
        Ok(filter) => (filter, None),
        Err(error) => (EnvFilter::new("warn"), Some(error)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.ansi),
        )
        .init();

    if let Some(error) = rejected {
        tracing::warn!(filter = %config.filter, %error, "Invalid log filter, using 'warn'");
    }
}
