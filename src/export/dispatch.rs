// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Per-export working state and object routing

use super::bounds::BoundsAccumulator;
use super::mesh::{process_mesh, MeshTarget};
use super::primitives::{box_from_marker, sphere_from_marker};
use crate::model::{ColVersion, CollisionModel};
use crate::scene::{ObjectKind, SceneObject};

/// Working set owned by one collection export
#[derive(Debug, Clone)]
pub struct ExportContext {
    pub model: CollisionModel,
    pub bounds: BoundsAccumulator,
}

impl ExportContext {
    pub fn new(version: ColVersion, model_name: impl Into<String>) -> Self {
        Self {
            model: CollisionModel::new(version, model_name),
            bounds: BoundsAccumulator::new(),
        }
    }

    /// Route one object to its processor and fold it into the bounds.
    /// Returns `false` for objects without a collision role.
    pub fn process_object(&mut self, object: &SceneObject) -> bool {
        let model = &mut self.model;
        let layout = model.face_layout();

        match &object.kind {
            ObjectKind::CollisionMesh(mesh) => {
                let face_groups = model
                    .version
                    .supports_face_groups()
                    .then_some(&mut model.face_groups);
                process_mesh(
                    object,
                    mesh,
                    layout,
                    MeshTarget {
                        vertices: &mut model.mesh_vertices,
                        faces: &mut model.mesh_faces,
                        face_groups,
                    },
                );
            }
            ObjectKind::ShadowMesh(mesh) => process_mesh(
                object,
                mesh,
                layout,
                MeshTarget {
                    vertices: &mut model.shadow_vertices,
                    faces: &mut model.shadow_faces,
                    face_groups: None,
                },
            ),
            ObjectKind::SphereMarker { display_size } => {
                model.spheres.push(sphere_from_marker(object, *display_size));
            }
            ObjectKind::BoxMarker => model.boxes.push(box_from_marker(object)),
            ObjectKind::Untagged => return false,
        }

        self.bounds.include_object(object);
        true
    }

    /// Write the finalized bounds into the model and hand it out
    pub fn finish(mut self) -> CollisionModel {
        self.model.bounds = self.bounds.finalize();
        self.model
    }
}
