// MeshLit - OBJ meshes to array literals
// Copyright (C) 2025 MeshLit Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

//! Configuration resolution for the binary.
//!
//! Precedence, lowest first: defaults, config file, `MESHLIT_*` variables,
//! global flags. Per-command flags are folded in by the commands.

use anyhow::{Context, Result};
use meshlit_config::{Config, ConfigFormat, ConfigLoader};
use meshlit_observability::{LogConfig, LogFormat};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Effective configuration and the file it was read from
#[derive(Debug)]
pub struct Settings {
    /// Merged configuration
    pub config: Config,

    /// `--config` or the discovered `meshlit.toml`; `None` for defaults
    pub source: Option<PathBuf>,
}

impl Settings {
    /// Log where the configuration came from, once a subscriber is installed
    pub fn log_source(&self) {
        match &self.source {
            Some(path) => {
                let format = ConfigFormat::from_path(path)
                    .map(|format| format.name())
                    .unwrap_or("unknown");
                info!(path = %path.display(), format, "Loaded configuration");
            }
            None => debug!("No configuration file, using defaults"),
        }
    }
}

/// Load the effective configuration
pub async fn load(explicit: Option<&Path>, log_format: Option<&str>) -> Result<Settings> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Config::find_file(
            std::env::current_dir().context("Failed to read current directory")?,
        ),
    };

    let mut config = ConfigLoader::new()
        .load_with_overrides(path.as_deref())
        .await
        .with_context(|| match &path {
            Some(path) => format!("Failed to load configuration from {}", path.display()),
            None => "Invalid configuration from environment".to_string(),
        })?;

    if let Some(format) = log_format {
        config.observability.log_format = format.to_string();
    }

    Ok(Settings {
        config,
        source: path,
    })
}

/// Build the subscriber settings
///
/// `-v` forces `debug`. Otherwise `RUST_LOG` wins when set, then the
/// configured level.
pub fn log_config(config: &Config, verbose: bool) -> Result<LogConfig> {
    let format: LogFormat = config
        .observability
        .log_format
        .parse()
        .context("Invalid --log-format")?;

    let mut log_config = LogConfig::new()
        .with_format(format)
        .with_color(console::colors_enabled_stderr());

    if verbose {
        log_config = log_config.with_level("debug");
    } else if std::env::var_os("RUST_LOG").is_none() {
        log_config = log_config.with_level(config.observability.log_level.clone());
    }

    Ok(log_config)
}
