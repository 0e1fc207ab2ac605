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

//! Test fixture management.
//!
//! Provides sample OBJ meshes and helpers for writing them to temp
//! directories.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Icosahedron as exported by Blender: 12 vertices, 20 triangles, with
/// texture and normal records and `v/vt/vn` face references.
pub const ICOSPHERE_OBJ: &str = "\
# Blender v3.6.0 OBJ File: ''
# www.blender.org
mtllib icosphere.mtl
o Icosphere
v -0.525731 0.850651 0.000000
v 0.525731 0.850651 0.000000
v -0.525731 -0.850651 0.000000
v 0.525731 -0.850651 0.000000
v 0.000000 -0.525731 0.850651
v 0.000000 0.525731 0.850651
v 0.000000 -0.525731 -0.850651
v 0.000000 0.525731 -0.850651
v 0.850651 0.000000 -0.525731
v 0.850651 0.000000 0.525731
v -0.850651 0.000000 -0.525731
v -0.850651 0.000000 0.525731
vt 0.000000 1.000000
vt 0.250000 0.750000
vt 0.500000 0.500000
vt 0.750000 0.250000
vn -0.5774 0.5774 0.5774
vn 0.0000 0.9342 0.3568
vn 0.0000 0.9342 -0.3568
vn -0.5774 0.5774 -0.5774
vn -0.9342 0.3568 0.0000
vn 0.5774 0.5774 0.5774
vn -0.3568 0.0000 0.9342
vn -0.9342 -0.3568 0.0000
vn -0.3568 0.0000 -0.9342
vn 0.5774 0.5774 -0.5774
vn 0.5774 -0.5774 0.5774
vn 0.0000 -0.9342 0.3568
vn 0.0000 -0.9342 -0.3568
vn 0.5774 -0.5774 -0.5774
vn 0.9342 -0.3568 0.0000
vn 0.3568 0.0000 0.9342
vn -0.5774 -0.5774 0.5774
vn -0.5774 -0.5774 -0.5774
vn 0.3568 0.0000 -0.9342
vn 0.9342 0.3568 0.0000
usemtl None
s off
f 1/1/1 12/2/1 6/3/1
f 1/1/2 6/2/2 2/3/2
f 1/1/3 2/2/3 8/3/3
f 1/1/4 8/2/4 11/3/4
f 1/1/5 11/2/5 12/3/5
f 2/1/6 6/2/6 10/3/6
f 6/1/7 12/2/7 5/3/7
f 12/1/8 11/2/8 3/3/8
f 11/1/9 8/2/9 7/3/9
f 8/1/10 2/2/10 9/3/10
f 4/1/11 10/2/11 5/3/11
f 4/1/12 5/2/12 3/3/12
f 4/1/13 3/2/13 7/3/13
f 4/1/14 7/2/14 9/3/14
f 4/1/15 9/2/15 10/3/15
f 5/1/16 10/2/16 6/3/16
f 3/1/17 5/2/17 12/3/17
f 7/1/18 3/2/18 11/3/18
f 9/1/19 7/2/19 8/3/19
f 10/1/20 9/2/20 2/3/20
";

/// 0-based faces of [`ICOSPHERE_OBJ`], in file order.
pub const ICOSPHERE_FACES: [[i64; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Triangulated unit cube: 8 vertices, 12 triangles, `v//vn` references.
pub const CUBE_OBJ: &str = "\
# cube.obj
o Cube
v 1.000000 1.000000 -1.000000
v 1.000000 -1.000000 -1.000000
v 1.000000 1.000000 1.000000
v 1.000000 -1.000000 1.000000
v -1.000000 1.000000 -1.000000
v -1.000000 -1.000000 -1.000000
v -1.000000 1.000000 1.000000
v -1.000000 -1.000000 1.000000
vn 0.0000 1.0000 0.0000
vn 0.0000 0.0000 1.0000
vn -1.0000 0.0000 0.0000
vn 0.0000 -1.0000 0.0000
vn 1.0000 0.0000 0.0000
vn 0.0000 0.0000 -1.0000
s off
f 5//1 3//1 1//1
f 3//2 8//2 4//2
f 7//3 6//3 8//3
f 2//4 8//4 6//4
f 1//5 4//5 2//5
f 5//6 2//6 6//6
f 5//1 7//1 3//1
f 3//2 7//2 8//2
f 7//3 5//3 6//3
f 2//4 4//4 8//4
f 1//5 3//5 4//5
f 5//6 1//6 2//6
";

/// Test fixture management utilities.
pub struct TestFixtures;

impl TestFixtures {
    /// Generate an OBJ with a strip of `face_count` triangles over
    /// `face_count + 2` vertices.
    pub fn triangle_strip(face_count: usize) -> String {
        let mut obj = String::from("o Strip\n");
        for i in 0..face_count + 2 {
            obj.push_str(&format!("v {}.0 {}.0 0.0\n", i / 2, i % 2));
        }
        for i in 1..=face_count {
            obj.push_str(&format!("f {} {} {}\n", i, i + 1, i + 2));
        }
        obj
    }

    /// OBJ exercising the lenient paths: a short vertex line, a quad and a
    /// face referencing a vertex that does not exist.
    pub fn irregular_obj() -> String {
        "\
v 0.0 0.0 0.0
v 1.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
f 1 2 3 4
f 1 2 5
"
        .to_string()
    }

    /// Write `content` as `name` inside `dir` and return its path.
    pub fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).expect("failed to write fixture");
        path
    }

    /// Create a temp directory holding a single OBJ file.
    pub fn temp_obj(name: &str, content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = Self::write(dir.path(), name, content);
        (dir, path)
    }
}
