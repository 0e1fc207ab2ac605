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

//! Face index validation
//!
//! Diagnostic only: every face gets a verdict, nothing aborts.

use crate::mesh::{Face, Mesh};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validity of a single face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceVerdict {
    /// 0-based face position
    pub face_index: usize,

    /// All indices lie in `[0, vertex_count)`
    pub valid: bool,
}

impl FaceVerdict {
    /// Verdict label used in listings
    pub fn label(&self) -> &'static str {
        if self.valid {
            "VALID"
        } else {
            "INVALID"
        }
    }
}

impl fmt::Display for FaceVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether every index of `face` refers to an existing vertex
pub fn face_is_valid(face: &Face, vertex_count: usize) -> bool {
    face.indices.iter().all(|&index| {
        usize::try_from(index)
            .map(|index| index < vertex_count)
            .unwrap_or(false)
    })
}

/// Produce one verdict per face, in face order
pub fn validate_faces(mesh: &Mesh) -> Vec<FaceVerdict> {
    let vertex_count = mesh.vertex_count();
    mesh.faces
        .iter()
        .enumerate()
        .map(|(face_index, face)| FaceVerdict {
            face_index,
            valid: face_is_valid(face, vertex_count),
        })
        .collect()
}
