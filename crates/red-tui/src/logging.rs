//! Logging setup.
//!
//! Console logging through `tracing` with an environment-controlled
//! filter (`RED_LOG`), plus an optional hourly-rolling JSON file when
//! a log directory is configured. Writing to stdout would corrupt the
//! alternate screen, so the interactive loop only uses the file layer.

use std::path::Path;

use anyhow::Context;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, registry::Registry, util::SubscriberInitExt, EnvFilter};

/// Initialize logging with the configured level and an optional log
/// directory for rolling JSON files.
pub fn init_logging(level: &str, log_dir: Option<&Path>, console: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_env("RED_LOG")
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = Registry::default().with(env_filter);

    let result = match (console, log_dir) {
        (true, Some(dir)) => {
            let appender = rolling::hourly(dir, "red-tui.log");
            registry
                .with(fmt::layer().with_writer(std::io::stdout))
                .with(fmt::layer().json().with_writer(appender).with_target(true))
                .try_init()
        }
        (true, None) => registry
            .with(fmt::layer().with_writer(std::io::stdout))
            .try_init(),
        (false, Some(dir)) => {
            let appender = rolling::hourly(dir, "red-tui.log");
            registry
                .with(fmt::layer().json().with_writer(appender).with_target(true))
                .try_init()
        }
        (false, None) => registry.try_init(),
    };
    result.context("failed to set the global tracing subscriber")
}

/// Log a key press and what it did.
pub fn log_key_action(key: char, action: &str) {
    tracing::info!(key = %key, action = action, "Key handled");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_macros_compile() {
        tracing::info!("render pass");
        tracing::debug!("tick");
        tracing::warn!("slow frame");
    }

    #[test]
    fn test_log_key_action_does_not_panic() {
        log_key_action('q', "quit");
    }

    #[test]
    fn test_init_logging_is_fallible_not_panicking() {
        // The global subscriber can only be set once per process;
        // double-init must surface as a Result, never a panic.
        let first = init_logging("info", None, false);
        let second = init_logging("info", None, false);
        let _ = (first, second);
    }
}
