// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Loading happens in three tiers, later tiers winning:
//! 1. TOML file (base values)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{validate_config, ConfigError, ConfigResult, TermfdConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "termfd.toml";

/// Find the termfd configuration file
///
/// Search order:
/// 1. `TERMFD_CONFIG_PATH` environment variable
/// 2. Current working directory: `./termfd.toml`
/// 3. Up to five parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("TERMFD_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by TERMFD_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        search_paths.extend(
            cwd.ancestors()
                .skip(1)
                .take(5)
                .map(|dir| dir.join(CONFIG_FILE_NAME)),
        );
    }

    if let Some(path) = search_paths.iter().find(|p| p.exists()) {
        return Ok(path.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found in any of these locations:\n{}\n\nSet TERMFD_CONFIG_PATH to specify a custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, the file is searched for.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if the file is not found, contains invalid TOML, carries an
/// unparsable override, or fails validation
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<TermfdConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: TermfdConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config)?;
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli)?;
    }

    validate_config(&config)?;
    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `TERMFD_READ_CAPACITY` -> `reader.capacity`
/// - `TERMFD_LOG_LEVEL` -> `logging.level`
/// - `TERMFD_LOG_FORMAT` -> `logging.format`
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if a variable is set but cannot be parsed
pub fn apply_environment_overrides(config: &mut TermfdConfig) -> ConfigResult<()> {
    let overrides = [
        ("read_capacity", env::var("TERMFD_READ_CAPACITY").ok()),
        ("log_level", env::var("TERMFD_LOG_LEVEL").ok()),
        ("log_format", env::var("TERMFD_LOG_FORMAT").ok()),
    ];
    for (key, value) in overrides {
        if let Some(value) = value {
            apply_override(config, key, &value)?;
        }
    }
    Ok(())
}

/// Apply CLI argument overrides to configuration
///
/// Recognized keys: `read_capacity`, `log_level`, `log_format`. Other keys are ignored.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if a recognized value cannot be parsed
pub fn apply_cli_overrides(
    config: &mut TermfdConfig,
    cli_args: &HashMap<String, String>,
) -> ConfigResult<()> {
    for key in ["read_capacity", "log_level", "log_format"] {
        if let Some(value) = cli_args.get(key) {
            apply_override(config, key, value)?;
        }
    }
    Ok(())
}

fn apply_override(config: &mut TermfdConfig, key: &str, value: &str) -> ConfigResult<()> {
    match key {
        "read_capacity" => {
            config.reader.capacity = value.trim().parse::<usize>().map_err(|_| {
                ConfigError::InvalidValue(format!("read_capacity '{}' is not a byte count", value))
            })?;
        }
        "log_level" => config.logging.level = value.to_string(),
        "log_format" => config.logging.format = value.parse()?,
        _ => {}
    }
    Ok(())
}
