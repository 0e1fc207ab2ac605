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

use super::extract::{self, ExtractArgs};
use anyhow::Result;
use clap::Parser;
use meshlit_config::Config;
use meshlit_mesh::DocumentKind;

/// Emit the face index array
#[derive(Parser, Debug)]
pub struct FacesCmd {
    #[command(flatten)]
    pub input: ExtractArgs,
}

impl FacesCmd {
    pub async fn execute(&self, config: Config) -> Result<()> {
        extract::run(&self.input, config, DocumentKind::Faces).await
    }
}
