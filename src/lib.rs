// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Colforge
//!
//! Converts a scene of tagged collision objects into legacy COL collision
//! models: triangulated meshes flattened into shared buffers, face groups,
//! sphere and box primitives, and collection-wide bounds.

pub mod cli;
pub mod error;
pub mod export;
pub mod geometry;
pub mod io;
pub mod model;
pub mod scene;
pub mod utils;

pub use error::{ColError, Result};
pub use export::{export_col, CollectionExporter, ExportOptions, TreeExporter};
pub use io::{load_scene, parse_scene, ColWriter, Encoder};
pub use model::{ColVersion, CollisionModel};
pub use scene::{Collection, ObjectKind, Scene, SceneObject};

/// Export a scene description file with the given options
pub fn export_file(scene_path: &str, options: &ExportOptions) -> Result<Option<Vec<u8>>> {
    let scene = load_scene(scene_path)?;
    export_col(&scene, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_export() {
        let scene = Scene::new(
            Collection::new("Scene Collection")
                .with_child(Collection::new("props").with_object(SceneObject::new("crate", ObjectKind::BoxMarker))),
        );
        let result = export_col(&scene, &ExportOptions::default());
        assert!(matches!(result, Ok(Some(bytes)) if bytes.starts_with(b"COL3")));
    }
}
