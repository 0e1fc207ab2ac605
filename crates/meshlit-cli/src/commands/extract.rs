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

//! Arguments and pipeline shared by the literal-emitting commands

use crate::output;
use anyhow::{Context, Result};
use clap::Args;
use meshlit_config::{Config, Validator};
use meshlit_mesh::{DocumentKind, LiteralEmitter, Mesh, MeshName, ObjParser};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Input and naming options common to `faces`, `geometry` and `debug`
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// OBJ file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Mesh name for comments and constants [default: file stem]
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Warn about skipped vertex lines and non-triangular faces
    #[arg(long)]
    pub strict: bool,

    /// Face groups per output line
    #[arg(long, value_name = "N")]
    pub per_line: Option<usize>,
}

impl ExtractArgs {
    /// Fold command-line flags over the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if self.strict {
            config.parse.strict = true;
        }
        if let Some(per_line) = self.per_line {
            config.emit.faces_per_line = per_line;
        }
    }

    /// Explicit `--name`, else the file stem
    pub fn mesh_name(&self) -> MeshName {
        match &self.name {
            Some(name) => MeshName::new(name),
            None => MeshName::from_path(&self.file),
        }
    }
}

/// Read and parse `path`, surfacing strict-mode findings on stderr
#[instrument(skip_all, fields(file = %file.display()))]
pub async fn load_mesh(file: &Path, config: &Config) -> Result<Mesh> {
    let parser = ObjParser::with_options(config.parse.to_options());
    let mesh = parser
        .load(file)
        .await
        .with_context(|| format!("Failed to extract mesh from {}", file.display()))?;

    if config.parse.strict {
        report_strict_findings(&mesh);
    }

    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "Mesh loaded"
    );
    Ok(mesh)
}

fn report_strict_findings(mesh: &Mesh) {
    for line in &mesh.skipped_lines {
        output::warning(&format!(
            "Line {}: vertex has fewer than 3 coordinates, skipped",
            line
        ));
    }

    let polygons: Vec<_> = mesh
        .faces
        .iter()
        .enumerate()
        .filter(|(_, face)| !face.is_triangle())
        .collect();
    for (index, face) in &polygons {
        output::warning(&format!("Face {} has {} vertices", index, face.arity()));
    }

    if !mesh.skipped_lines.is_empty() || !polygons.is_empty() {
        output::info(&format!(
            "{} skipped vertex line(s), {} non-triangular face(s)",
            mesh.skipped_lines.len(),
            polygons.len()
        ));
    }
}

/// Run the full pipeline for one document shape and write it to stdout
pub async fn run(args: &ExtractArgs, mut config: Config, kind: DocumentKind) -> Result<()> {
    args.apply(&mut config);
    config.validate().context("Invalid options")?;

    let mesh = load_mesh(&args.file, &config).await?;
    let emitter =
        LiteralEmitter::new(&mesh, args.mesh_name()).with_options(config.emit.to_options());

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", emitter.document(kind)).context("Failed to write output")?;
    stdout.flush().context("Failed to write output")?;
    Ok(())
}
