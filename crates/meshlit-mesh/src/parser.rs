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

//! Wavefront OBJ subset parser
//!
//! Only two record types are read:
//!
//! - `v x y z [...]`: vertex position; fields past the third are ignored
//! - `f a[/t/n] b[/t/n] c[/t/n] [...]`: face; only the vertex sub-field is used
//!
//! Everything else (`vn`, `vt`, `o`, `g`, `s`, `usemtl`, comments, blank
//! lines) is skipped. Classification is an exact prefix test on the raw line:
//! the record letter must be the first character and must be followed by
//! whitespace, so `vt 0.5 0.5` is never a vertex.
//!
//! Vertex lines with fewer than three coordinates are skipped, not rejected.
//! Non-numeric fields are fatal and the error names the line.
//!
//! # Example
//!
//! ```rust
//! use meshlit_mesh::ObjParser;
//!
//! let mesh = ObjParser::new()
//!     .parse_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/1/1 2/2/1 3/3/1\n")
//!     .unwrap();
//!
//! assert_eq!(mesh.vertex_count(), 3);
//! assert_eq!(mesh.faces[0].indices, vec![0, 1, 2]);
//! ```

use crate::error::{MeshError, Result};
use crate::mesh::{Face, Mesh, Vertex};
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Kind of an OBJ line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `v ` vertex record
    Vertex,
    /// `f ` face record
    Face,
    /// Anything else
    Ignored,
}

impl LineKind {
    /// Classify a raw (untrimmed) line
    pub fn classify(line: &str) -> Self {
        let mut chars = line.chars();
        match (chars.next(), chars.next()) {
            (Some('v'), Some(sep)) if sep.is_whitespace() => LineKind::Vertex,
            (Some('f'), Some(sep)) if sep.is_whitespace() => LineKind::Face,
            _ => LineKind::Ignored,
        }
    }
}

/// Parse a vertex line
///
/// Returns `Ok(None)` when fewer than three coordinates follow the tag.
pub fn parse_vertex(line: &str, line_number: usize) -> Result<Option<Vertex>> {
    let fields: Vec<&str> = line.split_whitespace().skip(1).take(3).collect();
    if fields.len() < 3 {
        return Ok(None);
    }

    let mut coords = [0.0f64; 3];
    for (slot, field) in coords.iter_mut().zip(&fields) {
        *slot = field
            .parse::<f64>()
            .map_err(|source| MeshError::InvalidCoordinate {
                line: line_number,
                field: (*field).to_string(),
                source,
            })?;
    }

    Ok(Some(Vertex::new(coords[0], coords[1], coords[2])))
}

/// Parse a face line, converting 1-based references to 0-based indices
pub fn parse_face(line: &str, line_number: usize) -> Result<Face> {
    let indices = line
        .split_whitespace()
        .skip(1)
        .map(|field| {
            let vertex_ref = field.split('/').next().unwrap_or(field);
            vertex_ref
                .parse::<i64>()
                .map(|one_based| one_based.saturating_sub(1))
                .map_err(|source| MeshError::InvalidIndex {
                    line: line_number,
                    field: field.to_string(),
                    source,
                })
        })
        .collect::<Result<Vec<i64>>>()?;

    Ok(Face::new(indices))
}

/// Parser behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Warn about input the parser tolerates (short vertex lines,
    /// non-triangular faces). Results are identical either way.
    pub strict: bool,
}

/// OBJ subset parser
#[derive(Debug, Default)]
pub struct ObjParser {
    options: ParseOptions,
}

impl ObjParser {
    /// Create a lenient parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with explicit options
    pub fn with_options(options: ParseOptions) -> Self {
        ObjParser { options }
    }

    /// Options in effect
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Read and parse an OBJ file
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn load(&self, path: &Path) -> Result<Mesh> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|source| MeshError::ReadFailed {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Read {} bytes", data.len());

        self.parse_bytes(&data)
    }

    /// Parse OBJ content from bytes
    pub fn parse_bytes(&self, data: &[u8]) -> Result<Mesh> {
        let content = std::str::from_utf8(data)?;
        self.parse_str(content)
    }

    /// Parse OBJ content
    #[instrument(skip(self, content), fields(size = content.len()))]
    pub fn parse_str(&self, content: &str) -> Result<Mesh> {
        let mut mesh = Mesh::new();
        for (index, line) in content.lines().enumerate() {
            self.parse_line(&mut mesh, index + 1, line)?;
        }
        self.finish(&mesh);
        Ok(mesh)
    }

    /// Parse OBJ content line by line from a reader
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Mesh> {
        let mut mesh = Mesh::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            self.parse_line(&mut mesh, index + 1, &line)?;
        }
        self.finish(&mesh);
        Ok(mesh)
    }

    fn parse_line(&self, mesh: &mut Mesh, line_number: usize, line: &str) -> Result<()> {
        match LineKind::classify(line) {
            LineKind::Vertex => match parse_vertex(line, line_number)? {
                Some(vertex) => mesh.vertices.push(vertex),
                None => {
                    if self.options.strict {
                        warn!(line = line_number, "Skipping vertex line with fewer than 3 coordinates");
                    } else {
                        debug!(line = line_number, "Skipping short vertex line");
                    }
                    mesh.skipped_lines.push(line_number);
                }
            },
            LineKind::Face => {
                let face = parse_face(line, line_number)?;
                if self.options.strict && !face.is_triangle() {
                    warn!(
                        line = line_number,
                        arity = face.arity(),
                        "Face is not a triangle"
                    );
                }
                mesh.faces.push(face);
            }
            LineKind::Ignored => {}
        }
        Ok(())
    }

    fn finish(&self, mesh: &Mesh) {
        debug!(
            "Parsed OBJ: vertices={}, faces={}, skipped={}",
            mesh.vertex_count(),
            mesh.face_count(),
            mesh.skipped_lines.len()
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_exact_prefix() {
        assert_eq!(LineKind::classify("v 1 2 3"), LineKind::Vertex);
        assert_eq!(LineKind::classify("v\t1 2 3"), LineKind::Vertex);
        assert_eq!(LineKind::classify("f 1 2 3"), LineKind::Face);
        assert_eq!(LineKind::classify("vn 0 1 0"), LineKind::Ignored);
        assert_eq!(LineKind::classify("vt 0.5 0.5"), LineKind::Ignored);
        assert_eq!(LineKind::classify("# v 1 2 3"), LineKind::Ignored);
        assert_eq!(LineKind::classify("o Icosphere"), LineKind::Ignored);
        assert_eq!(LineKind::classify("s off"), LineKind::Ignored);
        assert_eq!(LineKind::classify(""), LineKind::Ignored);
        assert_eq!(LineKind::classify("v"), LineKind::Ignored);
        assert_eq!(LineKind::classify("  v 1 2 3"), LineKind::Ignored);
    }

    #[test]
    fn test_parse_face_takes_vertex_subfield() {
        let face = parse_face("f 1/1/1 14/26/1 13/24/1", 1).unwrap();
        assert_eq!(face.indices, vec![0, 13, 12]);

        let face = parse_face("f 3//7 1//2 2//9", 1).unwrap();
        assert_eq!(face.indices, vec![2, 0, 1]);
    }

    #[test]
    fn test_parse_face_keeps_arity() {
        assert_eq!(parse_face("f 1 2 3 4", 1).unwrap().arity(), 4);
        assert_eq!(parse_face("f 1 2", 1).unwrap().arity(), 2);
        assert_eq!(parse_face("f ", 1).unwrap().arity(), 0);
    }

    #[test]
    fn test_parse_face_rejects_non_integer() {
        let err = parse_face("f 1 two 3", 42).unwrap_err();
        assert_eq!(err.line(), Some(42));
        assert!(err.to_string().contains("two"));

        // missing vertex sub-field
        assert!(parse_face("f /1/1 2 3", 1).is_err());
    }

    #[test]
    fn test_parse_vertex_short_line_is_skipped() {
        assert_eq!(parse_vertex("v 1.0 2.0", 1).unwrap(), None);
    }

    #[test]
    fn test_parse_vertex_ignores_extra_fields() {
        let vertex = parse_vertex("v 1.0 -2.5 3e2 1.0 0.5", 1).unwrap().unwrap();
        assert_eq!(vertex, Vertex::new(1.0, -2.5, 300.0));
    }

    #[test]
    fn test_parse_vertex_rejects_non_numeric() {
        let err = parse_vertex("v 1.0 abc 3.0", 9).unwrap_err();
        assert!(matches!(err, MeshError::InvalidCoordinate { line: 9, .. }));
    }

    #[test]
    fn test_parse_str_counts_records() {
        let obj = "# header\no Cube\nv 0 0 0\nvt 0 0\nvn 0 0 1\nv 1 0 0\nv 0 1 0\nv 1.0 2.0\ns off\nf 1/1/1 2/1/1 3/1/1\n";
        let mesh = ObjParser::new().parse_str(obj).unwrap();

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.skipped_lines, vec![8]);
    }

    #[test]
    fn test_strict_mode_does_not_change_results() {
        let obj = "v 0 0 0\nv 1 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\nf 1 2 4 3\n";
        let lenient = ObjParser::new().parse_str(obj).unwrap();
        let strict = ObjParser::with_options(ParseOptions { strict: true })
            .parse_str(obj)
            .unwrap();

        assert_eq!(lenient, strict);
    }

    #[test]
    fn test_parse_reader_matches_parse_str() {
        let obj = "v 0 0 0\r\nv 1 0 0\r\nv 0 1 0\r\nf 1 2 3\r\n";
        let from_str = ObjParser::new().parse_str(obj).unwrap();
        let from_reader = ObjParser::new().parse_reader(obj.as_bytes()).unwrap();

        assert_eq!(from_str, from_reader);
        assert_eq!(from_reader.faces[0].indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let result = ObjParser::new().parse_bytes(&[b'v', b' ', 0xff, 0xfe]);
        assert!(matches!(result, Err(MeshError::InvalidUtf8(_))));
    }
}
