//! Subscriber setup
//!
//! `NADIR_LOG`, then `RUST_LOG`, override the configured level. Logs go to
//! stderr so command output on stdout stays machine-readable.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, LogFormat};

/// Resolves the filter directive: environment first, then config.
fn level(config: &LogConfig) -> String {
    std::env::var("NADIR_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| config.level.clone())
}

/// Installs the global subscriber.
pub fn init(config: &LogConfig, verbose: u8) -> anyhow::Result<()> {
    let directive = match verbose {
        0 => level(config),
        1 => "debug".to_owned(),
        _ => "trace".to_owned(),
    };
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid log filter '{directive}'"))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!(e)).context("failed to install log subscriber")
}
