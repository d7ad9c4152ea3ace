// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Export across the collection tree

use super::collection::CollectionExporter;
use super::options::ExportOptions;
use crate::error::{ColError, Result};
use crate::io::{ColWriter, Encoder};
use crate::model::CollisionModel;
use crate::scene::{Collection, Scene};
use std::fs::File;
use std::io::Write;

/// Separator between a parent collection name and a nested collection's own name
pub const NAME_SEPARATOR: char = '.';

/// Export name of `collection`, dropping a `"<parent>."` prefix when nested
pub fn export_name(collection: &Collection, parent: Option<&Collection>) -> String {
    let name = collection.name.as_str();
    let Some(parent) = parent else {
        return name.to_string();
    };

    let prefix = format!("{}{}", parent.name, NAME_SEPARATOR);
    name.strip_prefix(prefix.as_str()).unwrap_or(name).to_string()
}

/// Collections to export, paired with their export names, in output order.
///
/// Each root contributes its direct children followed by itself. Without an
/// explicit root collection, the roots are every top-level collection plus
/// the scene collection.
pub fn traversal<'s>(
    scene: &'s Scene,
    options: &ExportOptions,
) -> Result<Vec<(&'s Collection, String)>> {
    let roots: Vec<&Collection> = match &options.collection {
        Some(name) => vec![scene
            .find_collection(name)
            .ok_or_else(|| ColError::CollectionNotFound(name.clone()))?],
        None => scene
            .top_level()
            .iter()
            .chain(std::iter::once(&scene.root))
            .collect(),
    };

    let mut order = Vec::new();
    for root in roots {
        for child in &root.children {
            order.push((child, export_name(child, Some(root))));
        }
        order.push((root, export_name(root, None)));
    }
    Ok(order)
}

/// Walks the scene and exports every collection in traversal order
pub struct TreeExporter<E: Encoder> {
    options: ExportOptions,
    encoder: E,
}

impl TreeExporter<ColWriter> {
    pub fn new(options: ExportOptions) -> Self {
        Self::with_encoder(options, ColWriter)
    }
}

impl<E: Encoder> TreeExporter<E> {
    pub fn with_encoder(options: ExportOptions, encoder: E) -> Self {
        Self { options, encoder }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Models that would be exported, without encoding them
    pub fn build_models(&self, scene: &Scene) -> Result<Vec<CollisionModel>> {
        let exporter = self.collection_exporter()?;
        Ok(traversal(scene, &self.options)?
            .into_iter()
            .filter_map(|(collection, name)| exporter.build(collection, &name))
            .collect())
    }

    /// Concatenated encoded output of every collection in traversal order
    pub fn encode(&self, scene: &Scene) -> Result<Vec<u8>> {
        let exporter = self.collection_exporter()?;
        let mut output = Vec::new();
        for (collection, name) in traversal(scene, &self.options)? {
            output.extend(exporter.export(collection, &name)?);
        }
        Ok(output)
    }

    /// Export the scene; writes to the configured file and returns `None`,
    /// or returns the bytes when no file is configured
    pub fn export(&self, scene: &Scene) -> Result<Option<Vec<u8>>> {
        let output = self.encode(scene)?;

        match &self.options.file_name {
            Some(path) => {
                let mut file = File::create(path)?;
                file.write_all(&output)?;
                log::info!("wrote {} bytes to {}", output.len(), path.display());
                Ok(None)
            }
            None => Ok(Some(output)),
        }
    }

    fn collection_exporter(&self) -> Result<CollectionExporter<&E>> {
        Ok(CollectionExporter::new(
            self.options.col_version()?,
            self.options.only_selected,
            &self.encoder,
        ))
    }
}

/// Export `scene` with the reference COL writer
pub fn export_col(scene: &Scene, options: &ExportOptions) -> Result<Option<Vec<u8>>> {
    TreeExporter::new(options.clone()).export(scene)
}
