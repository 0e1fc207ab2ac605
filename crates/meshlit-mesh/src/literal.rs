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

//! Java array-literal emission
//!
//! Three document shapes are produced from a parsed [`Mesh`]:
//!
//! - [`DocumentKind::Faces`]: banner comments and an `int[][]` face array
//! - [`DocumentKind::Geometry`]: a `float[][]` vertex array, the face array
//!   and a summary comment
//! - [`DocumentKind::Debug`]: vertex and face listings, the bare face array
//!   and a per-face validation listing
//!
//! Face groups are written side by side, each followed by a single space,
//! with a line break before every `faces_per_line`-th group. Rendering is a
//! pure function of the mesh, the name and the [`EmitOptions`].

use crate::mesh::{Face, Mesh, Vertex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Digits after the decimal point for vertex coordinates
pub const DEFAULT_PRECISION: usize = 6;

/// Face groups per output line
pub const DEFAULT_FACES_PER_LINE: usize = 5;

/// Formatting knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitOptions {
    /// Fixed-point digits for vertex coordinates
    pub precision: usize,

    /// Face groups per line; `0` keeps every group on one line
    pub faces_per_line: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            precision: DEFAULT_PRECISION,
            faces_per_line: DEFAULT_FACES_PER_LINE,
        }
    }
}

/// Name of the emitted mesh in its two spellings
///
/// `icosphere` becomes `Icosphere` in comments and `ICOSPHERE` in constant
/// names (`ICOSPHERE_FACES`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshName {
    display: String,
    constant: String,
}

impl MeshName {
    /// Build both spellings from a free-form name
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim();

        let mut constant = String::with_capacity(raw.len());
        let mut pending_separator = false;
        for c in raw.chars() {
            if c.is_ascii_alphanumeric() {
                if pending_separator && !constant.is_empty() {
                    constant.push('_');
                }
                pending_separator = false;
                constant.push(c.to_ascii_uppercase());
            } else {
                pending_separator = true;
            }
        }
        if constant.is_empty() {
            constant.push_str("MESH");
        }
        if constant.starts_with(|c: char| c.is_ascii_digit()) {
            constant.insert(0, '_');
        }

        let mut chars = raw.chars();
        let display = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => "Mesh".to_string(),
        };

        MeshName { display, constant }
    }

    /// Derive the name from a file stem (`models/cube.obj` → `Cube`)
    pub fn from_path(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(&stem)
    }

    /// Name used in comments
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Upper-case prefix used in constant names
    pub fn constant(&self) -> &str {
        &self.constant
    }
}

/// Render a vertex as fixed-point components: `-1.000000, 0.000000, 0.333333`
pub fn format_vertex(vertex: &Vertex, precision: usize) -> String {
    format!(
        "{:.p$}, {:.p$}, {:.p$}",
        vertex.x,
        vertex.y,
        vertex.z,
        p = precision
    )
}

/// Render face indices comma-joined: `0, 13, 12`
pub fn format_face(face: &Face) -> String {
    IndexList(&face.indices).to_string()
}

struct IndexList<'a>(&'a [i64]);

impl fmt::Display for IndexList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", index)?;
        }
        Ok(())
    }
}

/// Shortest round-trip float text with a signed, two-digit exponent:
/// `0.5`, `-1.0`, `1e-06`, `1.2345678901234567e+19`
struct ListingFloat(f64);

impl fmt::Display for ListingFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            return f.write_str("nan");
        }

        let text = format!("{:?}", self.0);
        match text.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => f.write_str(&text),
        }
    }
}

/// Face array body, without the opening and closing delimiter lines
pub struct FaceGroups<'a> {
    faces: &'a [Face],
    per_line: usize,
}

impl<'a> FaceGroups<'a> {
    /// Wrap `faces` with a break before every `per_line`-th group
    pub fn new(faces: &'a [Face], per_line: usize) -> Self {
        FaceGroups { faces, per_line }
    }
}

impl fmt::Display for FaceGroups<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, face) in self.faces.iter().enumerate() {
            if self.per_line > 0 && i > 0 && i % self.per_line == 0 {
                writeln!(f)?;
            }
            write!(f, "    {{{}}}, ", IndexList(&face.indices))?;
        }
        Ok(())
    }
}

/// Vertex array body, one `{x f, y f, z f},` row per vertex
pub struct VertexRows<'a> {
    vertices: &'a [Vertex],
    precision: usize,
}

impl<'a> VertexRows<'a> {
    /// Format `vertices` with `precision` fixed-point digits
    pub fn new(vertices: &'a [Vertex], precision: usize) -> Self {
        VertexRows {
            vertices,
            precision,
        }
    }
}

impl fmt::Display for VertexRows<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.vertices {
            writeln!(
                f,
                "    {{{:.p$}f, {:.p$}f, {:.p$}f}},",
                v.x,
                v.y,
                v.z,
                p = self.precision
            )?;
        }
        Ok(())
    }
}

/// Output document shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Face array with banner comments
    Faces,
    /// Vertex array, face array and summary
    Geometry,
    /// Listings, face array and validation verdicts
    Debug,
}

/// Renders a mesh into literal documents
#[derive(Debug)]
pub struct LiteralEmitter<'a> {
    mesh: &'a Mesh,
    name: MeshName,
    options: EmitOptions,
}

impl<'a> LiteralEmitter<'a> {
    /// Create an emitter with default options
    pub fn new(mesh: &'a Mesh, name: MeshName) -> Self {
        LiteralEmitter {
            mesh,
            name,
            options: EmitOptions::default(),
        }
    }

    /// Override formatting options
    pub fn with_options(mut self, options: EmitOptions) -> Self {
        self.options = options;
        self
    }

    /// Render a document to a string
    pub fn render(&self, kind: DocumentKind) -> String {
        self.document(kind).to_string()
    }

    /// Displayable document, for writing without an intermediate string
    pub fn document(&self, kind: DocumentKind) -> LiteralDocument<'_> {
        LiteralDocument {
            emitter: self,
            kind,
        }
    }

    fn write_faces_banner(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "// {} faces ({} triangular faces) with correct winding order",
            self.name.display(),
            self.mesh.face_count()
        )?;
        writeln!(
            f,
            "// Properly extracted from OBJ file - vertex indices are 1-based in OBJ, converted to 0-based"
        )
    }

    fn write_faces_array(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "private static final int[][] {}_FACES = {{",
            self.name.constant()
        )?;
        write!(
            f,
            "{}",
            FaceGroups::new(&self.mesh.faces, self.options.faces_per_line)
        )?;
        writeln!(f)?;
        writeln!(f, "}};")
    }

    fn write_vertices_array(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "// {} vertices ({} vertices)",
            self.name.display(),
            self.mesh.vertex_count()
        )?;
        writeln!(f, "// Generated from OBJ file")?;
        writeln!(
            f,
            "private static final float[][] {}_VERTICES = {{",
            self.name.constant()
        )?;
        write!(
            f,
            "{}",
            VertexRows::new(&self.mesh.vertices, self.options.precision)
        )?;
        writeln!(f, "}};")
    }

    fn write_faces(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_faces_banner(f)?;
        self.write_faces_array(f)
    }

    fn write_geometry(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_vertices_array(f)?;
        writeln!(f)?;
        self.write_faces(f)?;
        writeln!(f)?;
        writeln!(
            f,
            "// Summary: {} vertices, {} faces",
            self.mesh.vertex_count(),
            self.mesh.face_count()
        )
    }

    fn write_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertices:")?;
        for (i, v) in self.mesh.vertices.iter().enumerate() {
            writeln!(
                f,
                "  {}: [{}, {}, {}]",
                i,
                ListingFloat(v.x),
                ListingFloat(v.y),
                ListingFloat(v.z)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Faces (0-based indices):")?;
        for (i, face) in self.mesh.faces.iter().enumerate() {
            writeln!(f, "  Face {}: [{}]", i, IndexList(&face.indices))?;
        }

        writeln!(f)?;
        writeln!(f, "Java array format:")?;
        self.write_faces_array(f)?;

        writeln!(f)?;
        writeln!(f, "Face validation:")?;
        for (face, verdict) in self.mesh.faces.iter().zip(self.mesh.validate_faces()) {
            writeln!(
                f,
                "  Face {}: [{}] - {}",
                verdict.face_index,
                IndexList(&face.indices),
                verdict
            )?;
        }
        Ok(())
    }
}

/// A document bound to its emitter; implements [`fmt::Display`]
pub struct LiteralDocument<'a> {
    emitter: &'a LiteralEmitter<'a>,
    kind: DocumentKind,
}

impl fmt::Display for LiteralDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DocumentKind::Faces => self.emitter.write_faces(f),
            DocumentKind::Geometry => self.emitter.write_geometry(f),
            DocumentKind::Debug => self.emitter.write_debug(f),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn triangle_mesh() -> Mesh {
        Mesh {
            vertices: vec![
                Vertex::new(0.0, -1.0, 0.0),
                Vertex::new(1.0, 0.5, 0.0),
                Vertex::new(-1.0, 0.0, 0.333333333),
            ],
            faces: vec![Face::new(vec![0, 1, 2]), Face::new(vec![2, 1, 3])],
            skipped_lines: Vec::new(),
        }
    }

    fn faces(count: usize) -> Vec<Face> {
        (0..count as i64)
            .map(|i| Face::new(vec![i, i + 1, i + 2]))
            .collect()
    }

    #[test]
    fn test_format_vertex_six_places() {
        let vertex = Vertex::new(-1.0, 0.0, 0.333333333);
        assert_eq!(format_vertex(&vertex, 6), "-1.000000, 0.000000, 0.333333");
    }

    #[test]
    fn test_format_vertex_rounds() {
        let vertex = Vertex::new(0.6666666, 2.0000004, -0.0000006);
        assert_eq!(format_vertex(&vertex, 6), "0.666667, 2.000000, -0.000001");
    }

    #[test]
    fn test_format_face() {
        assert_eq!(format_face(&Face::new(vec![0, 13, 12])), "0, 13, 12");
        assert_eq!(format_face(&Face::new(vec![0, 1, 2, 3])), "0, 1, 2, 3");
        assert_eq!(format_face(&Face::new(Vec::new())), "");
    }

    #[test]
    fn test_thirteen_faces_wrap_twice() {
        let faces = faces(13);
        let body = FaceGroups::new(&faces, 5).to_string();

        assert_eq!(body.matches('\n').count(), 2);
        assert_eq!(body.matches("},").count(), 13);

        let lines: Vec<&str> = body.split('\n').collect();
        assert_eq!(lines[0].matches("},").count(), 5);
        assert_eq!(lines[1].matches("},").count(), 5);
        assert_eq!(lines[2].matches("},").count(), 3);
    }

    #[test]
    fn test_face_groups_layout() {
        let faces = faces(6);
        let body = FaceGroups::new(&faces, 5).to_string();
        assert_eq!(
            body,
            "    {0, 1, 2},     {1, 2, 3},     {2, 3, 4},     {3, 4, 5},     {4, 5, 6}, \n    {5, 6, 7}, "
        );
    }

    #[test]
    fn test_zero_per_line_never_wraps() {
        let faces = faces(12);
        let body = FaceGroups::new(&faces, 0).to_string();
        assert!(!body.contains('\n'));
    }

    #[test]
    fn test_mesh_name_spellings() {
        let name = MeshName::new("icosahedron");
        assert_eq!(name.display(), "Icosahedron");
        assert_eq!(name.constant(), "ICOSAHEDRON");

        let name = MeshName::new("low-poly sphere");
        assert_eq!(name.display(), "Low-poly sphere");
        assert_eq!(name.constant(), "LOW_POLY_SPHERE");

        assert_eq!(MeshName::new("3d-cube").constant(), "_3D_CUBE");
        assert_eq!(MeshName::new("").constant(), "MESH");
        assert_eq!(MeshName::new("").display(), "Mesh");
    }

    #[test]
    fn test_mesh_name_from_path() {
        let name = MeshName::from_path(Path::new("assets/models/cube.obj"));
        assert_eq!(name.display(), "Cube");
        assert_eq!(name.constant(), "CUBE");
    }

    #[test]
    fn test_faces_document() {
        let mesh = triangle_mesh();
        let out = LiteralEmitter::new(&mesh, MeshName::new("icosahedron")).render(DocumentKind::Faces);

        assert_eq!(
            out,
            "// Icosahedron faces (2 triangular faces) with correct winding order\n\
             // Properly extracted from OBJ file - vertex indices are 1-based in OBJ, converted to 0-based\n\
             private static final int[][] ICOSAHEDRON_FACES = {\n\
             \x20   {0, 1, 2},     {2, 1, 3}, \n\
             };\n"
        );
    }

    #[test]
    fn test_geometry_document() {
        let mesh = triangle_mesh();
        let out = LiteralEmitter::new(&mesh, MeshName::new("cube")).render(DocumentKind::Geometry);

        assert_eq!(
            out,
            "// Cube vertices (3 vertices)\n\
             // Generated from OBJ file\n\
             private static final float[][] CUBE_VERTICES = {\n\
             \x20   {0.000000f, -1.000000f, 0.000000f},\n\
             \x20   {1.000000f, 0.500000f, 0.000000f},\n\
             \x20   {-1.000000f, 0.000000f, 0.333333f},\n\
             };\n\
             \n\
             // Cube faces (2 triangular faces) with correct winding order\n\
             // Properly extracted from OBJ file - vertex indices are 1-based in OBJ, converted to 0-based\n\
             private static final int[][] CUBE_FACES = {\n\
             \x20   {0, 1, 2},     {2, 1, 3}, \n\
             };\n\
             \n\
             // Summary: 3 vertices, 2 faces\n"
        );
    }

    #[test]
    fn test_geometry_document_precision() {
        let mesh = triangle_mesh();
        let out = LiteralEmitter::new(&mesh, MeshName::new("cube"))
            .with_options(EmitOptions {
                precision: 2,
                faces_per_line: 5,
            })
            .render(DocumentKind::Geometry);

        assert!(out.contains("    {-1.00f, 0.00f, 0.33f},\n"));
    }

    #[test]
    fn test_debug_document() {
        let mesh = triangle_mesh();
        let out = LiteralEmitter::new(&mesh, MeshName::new("icosahedron")).render(DocumentKind::Debug);

        assert_eq!(
            out,
            "Vertices:\n\
             \x20 0: [0.0, -1.0, 0.0]\n\
             \x20 1: [1.0, 0.5, 0.0]\n\
             \x20 2: [-1.0, 0.0, 0.333333333]\n\
             \n\
             Faces (0-based indices):\n\
             \x20 Face 0: [0, 1, 2]\n\
             \x20 Face 1: [2, 1, 3]\n\
             \n\
             Java array format:\n\
             private static final int[][] ICOSAHEDRON_FACES = {\n\
             \x20   {0, 1, 2},     {2, 1, 3}, \n\
             };\n\
             \n\
             Face validation:\n\
             \x20 Face 0: [0, 1, 2] - VALID\n\
             \x20 Face 1: [2, 1, 3] - INVALID\n"
        );
    }

    #[test]
    fn test_polygon_faces_render_all_indices() {
        let mesh = Mesh {
            vertices: Vec::new(),
            faces: vec![Face::new(vec![0, 1, 2, 3]), Face::new(vec![4, 5])],
            skipped_lines: Vec::new(),
        };
        let out = LiteralEmitter::new(&mesh, MeshName::new("quad")).render(DocumentKind::Faces);
        assert!(out.contains("    {0, 1, 2, 3},     {4, 5}, \n};\n"));
    }

    #[test]
    fn test_empty_face_list_document() {
        let mesh = Mesh {
            vertices: vec![Vertex::new(0.0, 0.0, 0.0)],
            faces: Vec::new(),
            skipped_lines: Vec::new(),
        };
        let text = LiteralEmitter::new(&mesh, MeshName::new("empty")).render(DocumentKind::Faces);
        assert_eq!(
            text,
            "// Empty faces (0 triangular faces) with correct winding order\n\
             // Properly extracted from OBJ file - vertex indices are 1-based in OBJ, converted to 0-based\n\
             private static final int[][] EMPTY_FACES = {\n\
             \n\
             };\n"
        );
    }

    #[test]
    fn test_listing_float_exponents() {
        let render = |x: f64| ListingFloat(x).to_string();
        assert_eq!(render(0.000001), "1e-06");
        assert_eq!(render(12345678901234567890.0), "1.2345678901234567e+19");
        assert_eq!(render(-0.00005), "-5e-05");
        assert_eq!(render(1e100), "1e+100");
        assert_eq!(render(0.0001), "0.0001");
        assert_eq!(render(-1.0), "-1.0");
        assert_eq!(render(0.333333333), "0.333333333");
        assert_eq!(render(f64::NAN), "nan");
        assert_eq!(render(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_debug_listing_uses_signed_exponents() {
        let mesh = Mesh {
            vertices: vec![Vertex::new(0.000001, 12345678901234567890.0, -0.00005)],
            faces: Vec::new(),
            skipped_lines: Vec::new(),
        };
        let text = LiteralEmitter::new(&mesh, MeshName::new("tiny")).render(DocumentKind::Debug);
        assert!(text.starts_with("Vertices:\n  0: [1e-06, 1.2345678901234567e+19, -5e-05]\n"));
    }
}
