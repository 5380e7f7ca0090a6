// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Checks that values are within range before any descriptor is touched.

use crate::{ConfigError, ConfigResult, TermfdConfig};

/// Largest receive buffer accepted from configuration
pub const MAX_READ_CAPACITY: usize = 65536;

/// Levels accepted for `logging.level`
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    OutOfRange {
        field: String,
        value: usize,
        min: usize,
        max: usize,
    },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "{} = {} is outside valid range ({}-{})",
                    field, value, min, max
                )
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// All problems are collected and reported together.
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every violation
pub fn validate_config(config: &TermfdConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_reader(config, &mut errors);
    validate_logging(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_reader(config: &TermfdConfig, errors: &mut Vec<ConfigValidationError>) {
    let capacity = config.reader.capacity;
    if !(1..=MAX_READ_CAPACITY).contains(&capacity) {
        errors.push(ConfigValidationError::OutOfRange {
            field: "reader.capacity".to_string(),
            value: capacity,
            min: 1,
            max: MAX_READ_CAPACITY,
        });
    }
}

fn validate_logging(config: &TermfdConfig, errors: &mut Vec<ConfigValidationError>) {
    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!(
                "'{}' is not one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }
}
