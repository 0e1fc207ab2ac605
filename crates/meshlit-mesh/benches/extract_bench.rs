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

#![allow(clippy::unwrap_used)]
//! Parse and render throughput

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use meshlit_mesh::{DocumentKind, LiteralEmitter, MeshName, ObjParser};
use std::hint::black_box;

/// Generate a triangulated grid with `size * size` vertices
fn generate_grid(size: usize) -> String {
    let mut obj = String::from("o Grid\n");
    for row in 0..size {
        for col in 0..size {
            obj.push_str(&format!("v {}.5 {}.25 0.125\n", col, row));
            obj.push_str("vn 0.0 0.0 1.0\n");
        }
    }
    for row in 0..size - 1 {
        for col in 0..size - 1 {
            let a = row * size + col + 1;
            let b = a + 1;
            let c = a + size;
            let d = c + 1;
            obj.push_str(&format!("f {a}/1/1 {b}/1/1 {d}/1/1\n"));
            obj.push_str(&format!("f {a}/1/1 {d}/1/1 {c}/1/1\n"));
        }
    }
    obj
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_obj");

    for size in [16, 64, 256] {
        let obj = generate_grid(size);
        group.throughput(Throughput::Bytes(obj.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &obj, |b, obj| {
            let parser = ObjParser::new();
            b.iter(|| {
                let mesh = parser.parse_str(black_box(obj)).unwrap();
                black_box(mesh);
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_literal");
    let mesh = ObjParser::new().parse_str(&generate_grid(128)).unwrap();

    for (label, kind) in [
        ("faces", DocumentKind::Faces),
        ("geometry", DocumentKind::Geometry),
        ("debug", DocumentKind::Debug),
    ] {
        group.bench_function(label, |b| {
            let emitter = LiteralEmitter::new(&mesh, MeshName::new("grid"));
            b.iter(|| black_box(emitter.render(black_box(kind))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
