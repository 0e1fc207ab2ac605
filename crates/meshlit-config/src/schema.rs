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

use meshlit_mesh::{EmitOptions, ParseOptions, DEFAULT_FACES_PER_LINE, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "meshlit.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// OBJ parsing behaviour
    pub parse: ParseConfig,

    /// Literal rendering settings
    pub emit: EmitConfig,

    /// Observability settings
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load `meshlit.toml` from `dir`, falling back to defaults when absent
    pub async fn discover(dir: impl AsRef<Path>) -> crate::ConfigResult<Self> {
        match Self::find_file(dir) {
            Some(config_path) => crate::ConfigLoader::new().load_file(&config_path).await,
            None => Ok(Self::default()),
        }
    }

    /// Path of `meshlit.toml` in `dir`, when it is a regular file
    pub fn find_file(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let candidate = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        candidate.is_file().then_some(candidate)
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> crate::ConfigResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| crate::ConfigError::invalid_value("config", e.to_string()))
    }
}

/// Parser settings
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ParseConfig {
    /// Warn about skipped vertex lines and non-triangular faces
    pub strict: bool,
}

impl ParseConfig {
    /// Parser options for this section
    pub fn to_options(self) -> ParseOptions {
        ParseOptions {
            strict: self.strict,
        }
    }
}

/// Emitter settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmitConfig {
    /// Decimal places for vertex coordinates
    pub precision: usize,

    /// Face groups per output line
    pub faces_per_line: usize,
}

impl Default for EmitConfig {
    fn default() -> Self {
        EmitConfig {
            precision: DEFAULT_PRECISION,
            faces_per_line: DEFAULT_FACES_PER_LINE,
        }
    }
}

impl EmitConfig {
    /// Emitter options for this section
    pub fn to_options(self) -> EmitOptions {
        EmitOptions {
            precision: self.precision,
            faces_per_line: self.faces_per_line,
        }
    }
}

/// Observability settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level: trace, debug, info, warn, error or off
    pub log_level: String,

    /// Log format: pretty, compact or json
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        ObservabilityConfig {
            log_level: "warn".to_string(),
            log_format: "compact".to_string(),
        }
    }
}
