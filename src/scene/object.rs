// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene objects as handed over by the host

use crate::geometry::{BoundingBox, PolyMesh};
use crate::model::Surface;
use nalgebra::{Matrix4, Point3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Collision role of a scene object together with its role-specific data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectKind {
    /// Collidable triangle mesh
    CollisionMesh(PolyMesh),
    /// Shadow-only mesh, kept apart from collidable geometry and bounds
    ShadowMesh(PolyMesh),
    /// Empty drawn as a sphere; `display_size` is its radius
    SphereMarker { display_size: f32 },
    /// Empty drawn as a cube, spanning `location ± scale`
    BoxMarker,
    /// Anything without a collision role
    Untagged,
}

impl ObjectKind {
    pub fn is_tagged(&self) -> bool {
        !matches!(self, Self::Untagged)
    }

    pub fn mesh(&self) -> Option<&PolyMesh> {
        match self {
            Self::CollisionMesh(mesh) | Self::ShadowMesh(mesh) => Some(mesh),
            _ => None,
        }
    }
}

/// Local transform of an object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub location: Vector3<f32>,
    pub rotation: UnitQuaternion<f32>,
    pub scale: Vector3<f32>,
}

impl Transform {
    pub fn to_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_translation(&self.location)
            * self.rotation.to_homogeneous()
            * Matrix4::new_nonuniform_scaling(&self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            location: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

/// Material slot content relevant to collision export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surface: Surface,
}

impl Material {
    pub fn new(name: impl Into<String>, surface: Surface) -> Self {
        Self {
            name: name.into(),
            surface,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub kind: ObjectKind,
    #[serde(default)]
    pub transform: Transform,
    /// World matrix of the parent chain, if parented
    #[serde(default)]
    pub parent_matrix: Option<Matrix4<f32>>,
    /// Object-level surface used by sphere and box markers
    #[serde(default)]
    pub surface: Surface,
    /// Material slots; a slot may be empty
    #[serde(default)]
    pub materials: Vec<Option<Material>>,
    #[serde(default)]
    pub selected: bool,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            transform: Transform::default(),
            parent_matrix: None,
            surface: Surface::default(),
            materials: Vec::new(),
            selected: false,
        }
    }

    pub fn with_location(mut self, location: Vector3<f32>) -> Self {
        self.transform.location = location;
        self
    }

    pub fn with_rotation(mut self, rotation: UnitQuaternion<f32>) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vector3<f32>) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    pub fn with_material(mut self, material: Option<Material>) -> Self {
        self.materials.push(material);
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn location(&self) -> Point3<f32> {
        Point3::from(self.transform.location)
    }

    pub fn scale(&self) -> Vector3<f32> {
        self.transform.scale
    }

    pub fn world_matrix(&self) -> Matrix4<f32> {
        let local = self.transform.to_matrix();
        match &self.parent_matrix {
            Some(parent) => parent * local,
            None => local,
        }
    }

    /// Object-space bounds of the mesh data; markers have none and report a zero box
    pub fn local_bounds(&self) -> BoundingBox {
        self.kind
            .mesh()
            .map(PolyMesh::bounding_box)
            .unwrap_or_else(BoundingBox::zero)
    }

    /// Extent of the local bounds, scaled by the object scale
    pub fn dimensions(&self) -> Vector3<f32> {
        self.local_bounds().size().component_mul(&self.transform.scale)
    }
}
