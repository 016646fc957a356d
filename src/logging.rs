//! Console logging setup for the `orbsample` binary.
//!
//! Installs a `tracing-subscriber` formatter filtered by `RUST_LOG` when set,
//! otherwise by the level given on the command line.
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::orbsample_errors::OrbSampleError;

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(level: Level) -> Result<(), OrbSampleError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.to_string()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    Registry::default()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| OrbSampleError::LoggingInit(e.to_string()))
}

/// Parse a level name, falling back to INFO for anything unknown.
pub fn parse_log_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

#[cfg(test)]
mod logging_test {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_log_level("warning"), Level::WARN);
        assert_eq!(parse_log_level("chatty"), Level::INFO);
    }
}
