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

use super::extract;
use crate::output;
use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use meshlit_config::Config;
use meshlit_mesh::MeshSummary;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Show mesh statistics
#[derive(Parser, Debug)]
pub struct InspectCmd {
    /// OBJ file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Format as JSON
    #[arg(long)]
    pub json: bool,

    /// Warn about skipped vertex lines and non-triangular faces
    #[arg(long)]
    pub strict: bool,
}

#[derive(Serialize)]
struct InspectReport<'a> {
    file: &'a Path,
    #[serde(flatten)]
    summary: MeshSummary,
}

impl InspectCmd {
    pub async fn execute(&self, mut config: Config) -> Result<()> {
        if self.strict {
            config.parse.strict = true;
        }

        let mesh = extract::load_mesh(&self.file, &config).await?;
        let summary = mesh.summary();

        if self.json {
            let report = InspectReport {
                file: &self.file,
                summary,
            };
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize mesh summary")?;
            println!("{}", json);
            return Ok(());
        }

        output::header(&format!("Mesh statistics for {}", self.file.display()));
        println!();

        println!("{}", style("Geometry:").bold());
        output::detail("Vertices", &summary.vertex_count.to_string());
        output::detail("Faces", &summary.face_count.to_string());
        output::detail("Triangles", &summary.triangle_count.to_string());
        output::detail("Other polygons", &summary.polygon_count.to_string());
        println!();

        println!("{}", style("Checks:").bold());
        output::detail(
            "Skipped vertex lines",
            &summary.skipped_vertex_lines.to_string(),
        );
        output::detail("Invalid faces", &summary.invalid_face_count.to_string());
        println!();

        println!("{}", style("Bounds:").bold());
        match summary.bounding_box {
            Some(bbox) => {
                output::detail("Min", &format_point(bbox.min));
                output::detail("Max", &format_point(bbox.max));
                output::detail("Size", &format_point(bbox.size()));
                output::detail("Center", &format_point(bbox.center()));
            }
            None => output::detail("Box", "empty mesh"),
        }

        Ok(())
    }
}

fn format_point((x, y, z): (f64, f64, f64)) -> String {
    format!("({:.6}, {:.6}, {:.6})", x, y, z)
}
