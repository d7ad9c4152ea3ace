// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! In-memory collision model assembled by one export

use super::{Bounds, ColBox, ColVersion, Face, FaceGroup, FaceLayout, Sphere, Surface};
use nalgebra::Point3;
use serde::Serialize;

/// Collision model for one collection, ready for encoding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollisionModel {
    pub version: ColVersion,
    pub model_name: String,
    pub bounds: Bounds,
    pub mesh_vertices: Vec<Point3<f32>>,
    pub mesh_faces: Vec<Face>,
    pub shadow_vertices: Vec<Point3<f32>>,
    pub shadow_faces: Vec<Face>,
    pub face_groups: Vec<FaceGroup>,
    pub spheres: Vec<Sphere>,
    pub boxes: Vec<ColBox>,
    #[serde(skip)]
    face_layout: FaceLayout,
}

impl CollisionModel {
    pub fn new(version: ColVersion, model_name: impl Into<String>) -> Self {
        Self {
            version,
            model_name: model_name.into(),
            bounds: Bounds::zero(),
            mesh_vertices: Vec::new(),
            mesh_faces: Vec::new(),
            shadow_vertices: Vec::new(),
            shadow_faces: Vec::new(),
            face_groups: Vec::new(),
            spheres: Vec::new(),
            boxes: Vec::new(),
            face_layout: version.face_layout(),
        }
    }

    pub fn face_layout(&self) -> FaceLayout {
        self.face_layout
    }

    /// Face with surface data shaped for this model's version
    pub fn make_face(&self, indices: [usize; 3], surface: Surface) -> Face {
        Face {
            indices,
            surface: self.face_layout.surface(surface),
        }
    }

    pub fn has_shadow_mesh(&self) -> bool {
        !self.shadow_faces.is_empty()
    }

    /// No collidable primitives or faces at all
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty() && self.boxes.is_empty() && self.mesh_faces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FaceSurface;

    #[test]
    fn test_new_model_is_empty() {
        let model = CollisionModel::new(ColVersion::V3, "infernus");
        assert!(model.is_empty());
        assert!(!model.has_shadow_mesh());
        assert_eq!(model.bounds, Bounds::zero());
        assert_eq!(model.model_name, "infernus");
    }

    #[test]
    fn test_make_face_follows_version() {
        let surface = Surface::new(4, 0, 0, 200);
        let v1 = CollisionModel::new(ColVersion::V1, "a").make_face([0, 2, 1], surface);
        assert_eq!(v1.surface, FaceSurface::Full(surface));

        let v2 = CollisionModel::new(ColVersion::V2, "a").make_face([0, 2, 1], surface);
        assert_eq!(v2.surface, FaceSurface::Compact { material: 4, light: 200 });
        assert_eq!(v2.indices, [0, 2, 1]);
    }
}
