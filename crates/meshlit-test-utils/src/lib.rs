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

//! # MeshLit Test Utilities
//!
//! Shared test utilities for MeshLit crates providing:
//! - CLI command helpers for testing the `meshlit` binary
//! - OBJ fixtures and temp-file helpers
//! - Assertions over emitted array literals

pub mod assertions;
pub mod cli;
pub mod fixtures;

// Re-export commonly used items at crate root
pub use assertions::*;
pub use cli::{meshlit, MeshlitCommand};
pub use fixtures::TestFixtures;
