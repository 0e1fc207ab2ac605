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

// Command modules for the MeshLit CLI
pub mod debug;
pub mod extract;
pub mod faces;
pub mod geometry;
pub mod inspect;

pub use debug::DebugCmd;
pub use faces::FacesCmd;
pub use geometry::GeometryCmd;
pub use inspect::InspectCmd;
