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

//! MeshLit Observability Module
//!
//! Structured logging for the `meshlit` binary and its libraries.
//!
//! # Features
//!
//! - **Multiple Output Formats**: Pretty, compact and JSON
//! - **Environment-based Filtering**: log level falls back to `RUST_LOG`
//! - **Stdout-safe**: logs go to stderr by default so emitted literals on
//!   stdout stay clean
//!
//! # Example
//!
//! ```ignore
//! use meshlit_observability::{init_tracing, LogFormat};
//!
//! fn main() {
//!     init_tracing(LogFormat::Compact, Some("debug")).unwrap();
//!     tracing::debug!("Parsing mesh");
//! }
//! ```

pub mod config;
pub mod initialization;

pub use config::{LogConfig, LogError, LogFormat, LogOutput, DEFAULT_LOG_LEVEL};
pub use initialization::{init_tracing, init_tracing_with_config};

/// Tracing re-exports for convenience
pub use tracing::{debug, error, info, trace, warn, Level};
