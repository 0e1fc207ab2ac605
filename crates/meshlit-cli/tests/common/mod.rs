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

//! Common test helpers for MeshLit CLI tests.
//!
//! Re-exports utilities from meshlit-test-utils and adds helpers shared by
//! the CLI test binaries.

#![allow(dead_code, unused_imports)]

pub use meshlit_test_utils::fixtures::{CUBE_OBJ, ICOSPHERE_FACES, ICOSPHERE_OBJ};
pub use meshlit_test_utils::{
    assert_face_literal, literal_body, meshlit, parse_face_groups, MeshlitCommand, TestFixtures,
};

/// Icosphere faces as owned groups, for literal assertions.
pub fn icosphere_groups() -> Vec<Vec<i64>> {
    ICOSPHERE_FACES.iter().map(|face| face.to_vec()).collect()
}

/// Run `meshlit <args...> <path>` in `dir` and return stdout.
pub fn run_on(dir: &std::path::Path, args: &[&str], path: &std::path::Path) -> String {
    MeshlitCommand::new().in_dir(dir).args(args).arg(path).stdout()
}
