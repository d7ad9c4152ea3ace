// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene descriptions exchanged with the host as JSON

use crate::error::Result;
use crate::scene::Scene;
use std::path::Path;

/// Parse a scene from JSON text
pub fn parse_scene(source: &str) -> Result<Scene> {
    Ok(serde_json::from_str(source)?)
}

/// Load a scene from a JSON file
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene> {
    let source = std::fs::read_to_string(path.as_ref())?;
    parse_scene(&source)
}

/// Serialize a scene back to pretty JSON
pub fn scene_to_json(scene: &Scene) -> Result<String> {
    Ok(serde_json::to_string_pretty(scene)?)
}
