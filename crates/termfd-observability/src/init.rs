// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Installs a global `tracing` subscriber writing to stderr in text or JSON.

use anyhow::{anyhow, Context, Result};
use termfd_config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

use crate::cli::CrateDebugFlags;

/// Build the filter from the configured level and per-crate debug flags
///
/// # Errors
/// Fails if the resulting directive string does not parse.
pub fn build_env_filter(config: &LoggingConfig, debug_flags: &CrateDebugFlags) -> Result<EnvFilter> {
    let filter = debug_flags.to_filter_string(&config.level);
    EnvFilter::try_new(&filter).with_context(|| format!("Invalid log filter: {}", filter))
}

/// Install the global subscriber
///
/// # Errors
/// Fails if the filter is invalid or a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig, debug_flags: &CrateDebugFlags) -> Result<()> {
    let env_filter = build_env_filter(config, debug_flags)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::debug!(
        target: "termfd-observability",
        "Logging initialized (level={}, format={}, debug crates={:?})",
        config.level,
        config.format,
        debug_flags.enabled_crates
    );
    Ok(())
}

/// Initialize logging from defaults plus `--debug-*` arguments and `TERMFD_DEBUG`
pub fn init_logging_default() -> Result<()> {
    init_logging(&LoggingConfig::default(), &crate::cli::parse_debug_flags())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_env_filter() {
        let config = LoggingConfig::default();
        let flags = CrateDebugFlags::from_args(vec!["--debug-termfd-io".to_string()]);
        assert!(build_env_filter(&config, &flags).is_ok());
    }

    #[test]
    fn test_build_env_filter_rejects_garbage() {
        let config = LoggingConfig {
            level: "termfd-io=loud".to_string(),
            format: LogFormat::Text,
        };
        assert!(build_env_filter(&config, &CrateDebugFlags::default()).is_err());
    }

    #[test]
    fn test_second_init_fails() {
        let config = LoggingConfig::default();
        let flags = CrateDebugFlags::default();
        let _ = init_logging(&config, &flags);
        assert!(init_logging(&config, &flags).is_err());
    }
}
