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

//! CLI command helpers for testing meshlit commands.
//!
//! Provides convenient wrappers around assert_cmd for testing the meshlit CLI.

use assert_cmd::Command;
use std::path::Path;

/// Creates a new meshlit Command for testing.
///
/// Logging is pinned to `warn` so stray `RUST_LOG` settings in the
/// environment do not leak into captured stderr.
///
/// # Example
/// ```ignore
/// use meshlit_test_utils::meshlit;
///
/// meshlit()
///     .arg("faces")
///     .arg(&obj_path)
///     .assert()
///     .success();
/// ```
#[allow(deprecated)] // cargo_bin is deprecated but still works for our use case
pub fn meshlit() -> Command {
    let mut cmd = Command::cargo_bin("meshlit").expect("meshlit binary not found");
    cmd.env_remove("RUST_LOG");
    for var in [
        "MESHLIT_STRICT",
        "MESHLIT_PRECISION",
        "MESHLIT_FACES_PER_LINE",
        "MESHLIT_LOG_LEVEL",
        "MESHLIT_LOG_FORMAT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Fluent API wrapper for common meshlit command patterns.
pub struct MeshlitCommand {
    cmd: Command,
}

impl MeshlitCommand {
    /// Create a new MeshlitCommand.
    pub fn new() -> Self {
        Self { cmd: meshlit() }
    }

    /// Set the working directory for the command.
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    /// Add an argument to the command.
    pub fn arg(mut self, arg: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.arg(arg);
        self
    }

    /// Add multiple arguments to the command.
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    /// Set an environment variable for the command.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Execute the command and assert success.
    pub fn run_success(mut self) -> assert_cmd::assert::Assert {
        self.cmd.assert().success()
    }

    /// Execute the command and assert failure.
    pub fn run_failure(mut self) -> assert_cmd::assert::Assert {
        self.cmd.assert().failure()
    }

    /// Execute the command, assert success and return stdout as text.
    pub fn stdout(self) -> String {
        let output = self.run_success().get_output().stdout.clone();
        String::from_utf8(output).expect("meshlit stdout is not UTF-8")
    }

    /// Get the underlying Command for custom assertions.
    pub fn into_inner(self) -> Command {
        self.cmd
    }
}

impl Default for MeshlitCommand {
    fn default() -> Self {
        Self::new()
    }
}
