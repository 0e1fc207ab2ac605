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

//! Shared output formatting for CLI commands.
//!
//! Generated literals are the only thing written to stdout by the extraction
//! commands, so every diagnostic helper here writes to stderr. `header` and
//! `detail` are for report-style commands such as `inspect`.
//!
//! # Examples
//!
//! ```ignore
//! output::warning("Line 7: vertex has fewer than 3 coordinates, skipped");
//! output::detail("Vertices", "12");
//! ```

use console::style;

/// Print an error message to stderr with red X emoji.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("❌").red().bold(), msg);
}

/// Print a warning message to stderr with yellow warning emoji.
///
/// ```ignore
/// output::warning("Face 3 has 4 vertices");
/// // Output (stderr): ⚠️  Face 3 has 4 vertices
/// ```
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠️").yellow(), msg);
}

/// Print an informational message to stderr with cyan info emoji.
pub fn info(msg: &str) {
    eprintln!("{} {}", style("ℹ️").cyan(), msg);
}

/// Print a header line for a report.
pub fn header(msg: &str) {
    println!("{} {}", style("🔺").green().bold(), style(msg).bold());
}

/// Print a detail line with key-value formatting.
///
/// The key is displayed in regular text, and the value is highlighted in cyan.
pub fn detail(key: &str, value: &str) {
    println!("  {}: {}", key, style(value).cyan());
}
