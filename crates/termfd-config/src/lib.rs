// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # termfd Configuration
//!
//! Type-safe configuration for the descriptor Reader and for logging, loaded
//! from `termfd.toml` with environment and CLI overrides.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use termfd_config::load_config;
//!
//! let config = load_config(None, None).expect("Failed to load config");
//! println!("Read capacity: {}", config.reader.capacity);
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{apply_cli_overrides, apply_environment_overrides, find_config_file, load_config};
pub use types::*;
pub use validation::{validate_config, ConfigValidationError};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found. Searched: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TermfdConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_parse_error_conversion() {
        let err: ConfigError = toml::from_str::<TermfdConfig>("[reader").unwrap_err().into();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
