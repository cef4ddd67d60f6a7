// src/logging.rs

use crate::config;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. `RUST_LOG` wins when it parses, otherwise
/// `fallback` (usually `config::DEFAULT_LOG_FILTER`) is used.
pub fn setup_logging(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    let fmt_layer = fmt::layer().with_target(true).compact();
    // A second call (e.g. from tests) keeps the first subscriber.
    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        return;
    }
    tracing::info!("logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_is_idempotent() {
        setup_logging("debug");
        setup_logging("not a = valid [filter");
    }
}
