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

//! Integration tests for logging system
//!
//! Configuration building is tested freely; global subscriber
//! installation is tested once because it can only succeed once per
//! process.

use meshlit_observability::{
    init_tracing_with_config, LogConfig, LogError, LogFormat, LogOutput,
};

#[test]
fn test_config_builder_chaining() {
    let config = LogConfig::new()
        .with_format(LogFormat::Json)
        .with_level("debug")
        .with_timestamps(true)
        .with_color(false)
        .with_targets(false)
        .with_span_events(true)
        .with_output(LogOutput::Stdout);

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, Some("debug".to_string()));
    assert!(config.use_timestamps);
    assert!(!config.use_color);
    assert!(!config.include_targets);
    assert!(config.span_events);
    assert_eq!(config.output, LogOutput::Stdout);
}

#[test]
fn test_explicit_level_overrides_env() {
    let config = LogConfig::new().with_level("error");
    assert_eq!(config.get_effective_level(), "error");
}

#[test]
fn test_second_initialization_is_rejected() {
    let config = LogConfig::new().with_level("warn").with_color(false);

    assert!(init_tracing_with_config(config.clone()).is_ok());
    meshlit_observability::warn!("subscriber installed");

    let second = init_tracing_with_config(config);
    assert!(matches!(second, Err(LogError::AlreadyInitialized(_))));
}
