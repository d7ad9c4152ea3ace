// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene to collision model export pipeline

mod bounds;
mod collection;
mod dispatch;
mod mesh;
mod options;
mod primitives;
mod surface;
mod tree;

pub use bounds::{object_extent, BoundsAccumulator};
pub use collection::CollectionExporter;
pub use dispatch::ExportContext;
pub use mesh::{process_mesh, MeshTarget};
pub use options::{ExportOptions, CONFIG_FILE};
pub use primitives::{box_from_marker, sphere_from_marker};
pub use surface::surface_for;
pub use tree::{export_col, export_name, traversal, TreeExporter, NAME_SEPARATOR};
