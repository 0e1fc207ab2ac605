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

//! OBJ mesh extraction for MeshLit
//!
//! This crate provides:
//! - An OBJ-subset parser for `v` and `f` records
//! - 1-based to 0-based face index conversion
//! - Face index validation against the vertex list
//! - Java array-literal rendering of vertices and faces
//!
//! # Example
//!
//! ```rust
//! use meshlit_mesh::{DocumentKind, LiteralEmitter, MeshName, ObjParser};
//!
//! let mesh = ObjParser::new()
//!     .parse_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n")
//!     .unwrap();
//!
//! let java = LiteralEmitter::new(&mesh, MeshName::new("triangle")).render(DocumentKind::Faces);
//! assert!(java.contains("TRIANGLE_FACES"));
//! ```

pub mod error;
pub mod literal;
pub mod mesh;
pub mod parser;
pub mod validation;

// Re-export commonly used types
pub use error::{MeshError, Result};
pub use literal::{
    format_face, format_vertex, DocumentKind, EmitOptions, LiteralEmitter, MeshName,
    DEFAULT_FACES_PER_LINE, DEFAULT_PRECISION,
};
pub use mesh::{BoundingBox, Face, Mesh, MeshSummary, Vertex};
pub use parser::{parse_face, parse_vertex, LineKind, ObjParser, ParseOptions};
pub use validation::{face_is_valid, validate_faces, FaceVerdict};
