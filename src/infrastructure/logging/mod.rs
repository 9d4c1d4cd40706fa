//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty stdout output
//! - Optional daily-rolling file output

use std::io;

use anyhow::{anyhow, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::domain::models::LoggingConfig;

/// Initialize the global tracing subscriber from configuration.
///
/// Returns a guard that must be held for the lifetime of the process
/// when file output is enabled; dropping it stops the background writer.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let level = parse_log_level(&config.level)?;
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    if let Some(ref log_dir) = config.log_dir {
        let appender = rolling::daily(log_dir, "exemplar.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);

        // File output is always JSON for structured ingestion
        let file_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_filter(env_filter.clone());

        if config.format == "pretty" {
            let stdout_layer = tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(io::stdout)
                .with_target(true)
                .with_filter(env_filter);

            tracing_subscriber::registry()
                .with(file_layer)
                .with(stdout_layer)
                .init();
        } else {
            let stdout_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(io::stdout)
                .with_target(true)
                .with_filter(env_filter);

            tracing_subscriber::registry()
                .with(file_layer)
                .with(stdout_layer)
                .init();
        }

        Ok(Some(guard))
    } else if config.format == "pretty" {
        let stdout_layer = tracing_subscriber::fmt::layer()
            .pretty()
            .with_writer(io::stdout)
            .with_target(true)
            .with_filter(env_filter);

        tracing_subscriber::registry().with(stdout_layer).init();
        Ok(None)
    } else {
        let stdout_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stdout)
            .with_target(true)
            .with_filter(env_filter);

        tracing_subscriber::registry().with(stdout_layer).init();
        Ok(None)
    }
}

fn parse_log_level(level: &str) -> Result<Level> {
    match level {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(anyhow!("Unknown log level: {other}")),
    }
}
