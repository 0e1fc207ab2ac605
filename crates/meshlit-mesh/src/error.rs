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

//! Error types for mesh extraction

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// Mesh extraction errors
#[derive(Debug, Error)]
pub enum MeshError {
    /// Mesh file could not be opened or read
    #[error("Failed to read mesh file {}: {source}", path.display())]
    ReadFailed {
        /// Path that was being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// IO error while streaming lines from a reader
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Mesh content is not valid UTF-8
    #[error("Invalid UTF-8 in OBJ: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A vertex line carries a non-numeric coordinate
    #[error("Line {line}: invalid vertex coordinate '{field}': {source}")]
    InvalidCoordinate {
        /// 1-based line number
        line: usize,
        /// Offending field text
        field: String,
        /// Float parse failure
        #[source]
        source: ParseFloatError,
    },

    /// A face line carries a non-integer vertex reference
    #[error("Line {line}: invalid face index '{field}': {source}")]
    InvalidIndex {
        /// 1-based line number
        line: usize,
        /// Offending field text
        field: String,
        /// Integer parse failure
        #[source]
        source: ParseIntError,
    },
}

impl MeshError {
    /// Line number the error points at, if it came from a specific line
    pub fn line(&self) -> Option<usize> {
        match self {
            MeshError::InvalidCoordinate { line, .. } | MeshError::InvalidIndex { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}

/// Result type for mesh operations
pub type Result<T> = std::result::Result<T, MeshError>;
