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

//! Mesh data model
//!
//! A [`Mesh`] is two ordered lists: vertex positions and faces. A vertex's
//! position in the list is its 0-based index, which is what face indices
//! refer to once the parser has converted them from OBJ's 1-based numbering.

use crate::validation::{self, FaceVerdict};
use serde::{Deserialize, Serialize};

/// A 3D vertex position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// X coordinate
    pub x: f64,

    /// Y coordinate
    pub y: f64,

    /// Z coordinate
    pub z: f64,
}

impl Vertex {
    /// Create a vertex from its coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vertex { x, y, z }
    }

    /// Coordinates as an array
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// A polygon given as 0-based vertex indices in winding order
///
/// Indices are signed: an OBJ reference of `0` or a relative (negative)
/// reference converts to a negative value, which validation reports as
/// out of range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    /// Vertex indices
    pub indices: Vec<i64>,
}

impl Face {
    /// Create a face from 0-based indices
    pub fn new(indices: Vec<i64>) -> Self {
        Face { indices }
    }

    /// Number of vertices referenced by this face
    pub fn arity(&self) -> usize {
        self.indices.len()
    }

    /// Whether this face is a triangle
    pub fn is_triangle(&self) -> bool {
        self.arity() == 3
    }
}

impl From<Vec<i64>> for Face {
    fn from(indices: Vec<i64>) -> Self {
        Face::new(indices)
    }
}

/// Parsed mesh
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions in file order
    pub vertices: Vec<Vertex>,

    /// Faces in file order
    pub faces: Vec<Face>,

    /// 1-based line numbers of vertex lines skipped for having fewer than
    /// three coordinates
    pub skipped_lines: Vec<usize>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check every face against the vertex list
    pub fn validate_faces(&self) -> Vec<FaceVerdict> {
        validation::validate_faces(self)
    }

    /// Axis-aligned bounds of all vertices, `None` for a mesh without vertices
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        if self.vertices.is_empty() {
            return None;
        }

        let mut bbox = BoundingBox::new();
        for vertex in &self.vertices {
            bbox.expand(vertex.x, vertex.y, vertex.z);
        }
        Some(bbox)
    }

    /// Summarize counts, validity and bounds
    pub fn summary(&self) -> MeshSummary {
        let triangle_count = self.faces.iter().filter(|f| f.is_triangle()).count();
        let invalid_face_count = self
            .validate_faces()
            .iter()
            .filter(|verdict| !verdict.valid)
            .count();

        MeshSummary {
            vertex_count: self.vertex_count(),
            face_count: self.face_count(),
            triangle_count,
            polygon_count: self.face_count() - triangle_count,
            skipped_vertex_lines: self.skipped_lines.len(),
            invalid_face_count,
            bounding_box: self.bounding_box(),
        }
    }
}

/// 3D bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum coordinates (x, y, z)
    pub min: (f64, f64, f64),

    /// Maximum coordinates (x, y, z)
    pub max: (f64, f64, f64),
}

impl BoundingBox {
    /// Create an empty (inverted) bounding box
    pub fn new() -> Self {
        BoundingBox {
            min: (f64::MAX, f64::MAX, f64::MAX),
            max: (f64::MIN, f64::MIN, f64::MIN),
        }
    }

    /// Expand bounding box to include a point
    pub fn expand(&mut self, x: f64, y: f64, z: f64) {
        self.min.0 = self.min.0.min(x);
        self.min.1 = self.min.1.min(y);
        self.min.2 = self.min.2.min(z);
        self.max.0 = self.max.0.max(x);
        self.max.1 = self.max.1.max(y);
        self.max.2 = self.max.2.max(z);
    }

    /// Edge lengths along each axis
    pub fn size(&self) -> (f64, f64, f64) {
        (
            self.max.0 - self.min.0,
            self.max.1 - self.min.1,
            self.max.2 - self.min.2,
        )
    }

    /// Center point
    pub fn center(&self) -> (f64, f64, f64) {
        (
            (self.min.0 + self.max.0) / 2.0,
            (self.min.1 + self.max.1) / 2.0,
            (self.min.2 + self.max.2) / 2.0,
        )
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

/// Mesh statistics reported by `meshlit inspect`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshSummary {
    /// Number of vertices
    pub vertex_count: usize,

    /// Number of faces of any arity
    pub face_count: usize,

    /// Faces with exactly three indices
    pub triangle_count: usize,

    /// Faces with any other number of indices
    pub polygon_count: usize,

    /// Vertex lines skipped for having fewer than three coordinates
    pub skipped_vertex_lines: usize,

    /// Faces referencing at least one out-of-range vertex
    pub invalid_face_count: usize,

    /// Vertex bounds, absent for a mesh without vertices
    pub bounding_box: Option<BoundingBox>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn quad_mesh() -> Mesh {
        Mesh {
            vertices: vec![
                Vertex::new(0.0, 0.0, 0.0),
                Vertex::new(1.0, 0.0, 0.0),
                Vertex::new(1.0, 1.0, 0.0),
                Vertex::new(0.0, 1.0, 0.0),
            ],
            faces: vec![Face::new(vec![0, 1, 2]), Face::new(vec![0, 2, 3, 4])],
            skipped_lines: vec![7],
        }
    }

    #[test]
    fn test_face_arity() {
        assert!(Face::new(vec![0, 1, 2]).is_triangle());
        assert!(!Face::new(vec![0, 1, 2, 3]).is_triangle());
        assert_eq!(Face::from(Vec::<i64>::new()).arity(), 0);
    }

    #[test]
    fn test_bounding_box_expand() {
        let mut bbox = BoundingBox::new();
        bbox.expand(1.0, 2.0, 3.0);
        bbox.expand(-1.0, -2.0, -3.0);

        assert_eq!(bbox.min, (-1.0, -2.0, -3.0));
        assert_eq!(bbox.max, (1.0, 2.0, 3.0));
        assert_eq!(bbox.size(), (2.0, 4.0, 6.0));
        assert_eq!(bbox.center(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_empty_mesh_has_no_bounds() {
        assert!(Mesh::new().bounding_box().is_none());
    }

    #[test]
    fn test_summary_counts() {
        let summary = quad_mesh().summary();

        assert_eq!(summary.vertex_count, 4);
        assert_eq!(summary.face_count, 2);
        assert_eq!(summary.triangle_count, 1);
        assert_eq!(summary.polygon_count, 1);
        assert_eq!(summary.skipped_vertex_lines, 1);
        // index 4 is out of range for 4 vertices
        assert_eq!(summary.invalid_face_count, 1);

        let bbox = summary.bounding_box.expect("bounds for non-empty mesh");
        assert_eq!(bbox.min, (0.0, 0.0, 0.0));
        assert_eq!(bbox.max, (1.0, 1.0, 0.0));
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = quad_mesh().summary();
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["vertex_count"], 4);
        assert_eq!(value["invalid_face_count"], 1);
        assert_eq!(value["bounding_box"]["max"], serde_json::json!([1.0, 1.0, 0.0]));

        let back: MeshSummary = serde_json::from_value(value).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn test_empty_summary_json_has_null_bounds() {
        let json = serde_json::to_string(&Mesh::new().summary()).unwrap();
        assert!(json.contains("\"bounding_box\":null"));
    }
}
