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

//! Configuration for MeshLit
//!
//! Settings are layered:
//!
//! - Built-in defaults
//! - A TOML, YAML or JSON file (`meshlit.toml` by default)
//! - `MESHLIT_*` environment variables
//!
//! Command-line flags are applied on top by the binary, after which the
//! result is validated again.
//!
//! # Example
//!
//! ```no_run
//! use meshlit_config::ConfigLoader;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = ConfigLoader::new();
//!     let config = loader.load_with_overrides(Some("meshlit.toml")).await?;
//!
//!     println!("precision: {}", config.emit.precision);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

// Re-export commonly used items
pub use error::{ConfigError, ConfigResult};
pub use loader::{apply_overrides, ConfigFormat, ConfigLoader, ENV_PREFIX};
pub use schema::*;
pub use validation::{Validator, LOG_FORMATS, LOG_LEVELS, MAX_PRECISION};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("faces_per_line"));
        assert!(json.contains("compact"));
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = Config::default();
        config.observability.log_level = "invalid_level".to_string();
        assert!(config.validate().is_err());
    }
}
