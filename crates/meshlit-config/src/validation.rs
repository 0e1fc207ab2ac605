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

use crate::error::{ConfigError, ConfigResult};
use crate::schema::{Config, EmitConfig, ObservabilityConfig, ParseConfig};

/// Largest fixed-point precision that still says something about an `f64`
pub const MAX_PRECISION: usize = 17;

/// Accepted `observability.log_level` values
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Accepted `observability.log_format` values
pub const LOG_FORMATS: [&str; 3] = ["pretty", "compact", "json"];

/// Trait for validating configuration
pub trait Validator {
    /// Check every field, returning the first violation
    fn validate(&self) -> ConfigResult<()>;
}

impl Validator for Config {
    fn validate(&self) -> ConfigResult<()> {
        self.parse.validate()?;
        self.emit.validate()?;
        self.observability.validate()?;
        Ok(())
    }
}

impl Validator for ParseConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}

impl Validator for EmitConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::invalid_value(
                "emit.precision",
                format!(
                    "must be between 0 and {}, got {}",
                    MAX_PRECISION, self.precision
                ),
            ));
        }

        if self.faces_per_line == 0 {
            return Err(ConfigError::invalid_value(
                "emit.faces_per_line",
                "must be at least 1",
            ));
        }

        Ok(())
    }
}

impl Validator for ObservabilityConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::invalid_value(
                "observability.log_level",
                format!("must be one of: {}", LOG_LEVELS.join(", ")),
            ));
        }

        if !LOG_FORMATS.contains(&self.log_format.to_lowercase().as_str()) {
            return Err(ConfigError::invalid_value(
                "observability.log_format",
                format!("must be one of: {}", LOG_FORMATS.join(", ")),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_precision_limit() {
        let mut emit = EmitConfig {
            precision: MAX_PRECISION,
            ..EmitConfig::default()
        };
        assert!(emit.validate().is_ok());

        emit.precision = MAX_PRECISION + 1;
        let err = emit.validate().unwrap_err();
        assert!(err.to_string().contains("emit.precision"));
    }

    #[test]
    fn test_zero_faces_per_line_rejected() {
        let emit = EmitConfig {
            precision: 6,
            faces_per_line: 0,
        };
        assert!(matches!(
            emit.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "emit.faces_per_line"
        ));
    }

    #[test]
    fn test_log_level_validation() {
        let mut obs = ObservabilityConfig {
            log_level: "verbose".to_string(),
            ..ObservabilityConfig::default()
        };
        assert!(obs.validate().is_err());

        obs.log_level = "DEBUG".to_string();
        assert!(obs.validate().is_ok());
    }

    #[test]
    fn test_log_format_validation() {
        let mut obs = ObservabilityConfig {
            log_format: "xml".to_string(),
            ..ObservabilityConfig::default()
        };
        assert!(obs.validate().is_err());

        obs.log_format = "json".to_string();
        assert!(obs.validate().is_ok());
    }
}
