// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Export of a single collection into one collision model

use super::bounds::BoundsAccumulator;
use super::dispatch::ExportContext;
use crate::error::Result;
use crate::io::Encoder;
use crate::model::{ColVersion, CollisionModel};
use crate::scene::Collection;
use std::path::Path;

/// Builds and encodes one collision model per collection
pub struct CollectionExporter<E: Encoder> {
    version: ColVersion,
    only_selected: bool,
    encoder: E,
}

impl<E: Encoder> CollectionExporter<E> {
    pub fn new(version: ColVersion, only_selected: bool, encoder: E) -> Self {
        Self {
            version,
            only_selected,
            encoder,
        }
    }

    /// Assemble the model for `collection` under `name`.
    ///
    /// Returns `None` when nothing was processed and either the selection
    /// filter was active or the collection carries no stored bounds.
    pub fn build(&self, collection: &Collection, name: &str) -> Option<CollisionModel> {
        let mut ctx = ExportContext::new(self.version, model_name(name));

        let stored_bounds = collection.stored_bounds();
        if let Some((min, max)) = stored_bounds {
            ctx.bounds = BoundsAccumulator::seeded(min, max);
        }

        let mut total_objects = 0usize;
        for object in &collection.objects {
            if !object.kind.is_tagged() {
                continue;
            }
            if self.only_selected && !object.selected {
                continue;
            }
            if ctx.process_object(object) {
                total_objects += 1;
            }
        }

        let model = ctx.finish();

        if total_objects == 0 && (self.only_selected || stored_bounds.is_none()) {
            log::debug!("{}: nothing to export", collection.name);
            return None;
        }

        log::info!(
            "{} -> {}: {} vertices, {} faces, {} spheres, {} boxes",
            collection.name,
            model.model_name,
            model.mesh_vertices.len(),
            model.mesh_faces.len(),
            model.spheres.len(),
            model.boxes.len()
        );
        Some(model)
    }

    /// Encoded bytes for `collection`; empty when the collection is skipped
    pub fn export(&self, collection: &Collection, name: &str) -> Result<Vec<u8>> {
        match self.build(collection, name) {
            Some(model) => self.encoder.encode(&model),
            None => Ok(Vec::new()),
        }
    }
}

/// Final path component of `name`
fn model_name(name: &str) -> String {
    Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}
