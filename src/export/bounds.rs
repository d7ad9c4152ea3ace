// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Collection-wide bounds aggregation and finalization

use crate::geometry::BoundingBox;
use crate::model::Bounds;
use crate::scene::{ObjectKind, SceneObject};
use crate::utils::math::max_component;
use nalgebra::{Point3, Vector3};

/// Running collection bounds, created on the first contribution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundsAccumulator {
    range: Option<BoundingBox>,
}

impl BoundsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from bounds stored on the collection by an earlier import
    pub fn seeded(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self {
            range: Some(BoundingBox::new(min, max)),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.range.is_some()
    }

    /// Fold a box into the running range
    pub fn include(&mut self, bbox: &BoundingBox) {
        self.range
            .get_or_insert_with(BoundingBox::empty)
            .merge(bbox);
    }

    /// Fold one object's extent in; shadow and untagged objects are skipped
    pub fn include_object(&mut self, object: &SceneObject) {
        if let Some(extent) = object_extent(object) {
            log::debug!(
                "bounds += {} [{:?} .. {:?}]",
                object.name,
                extent.min.coords.as_slice(),
                extent.max.coords.as_slice()
            );
            self.include(&extent);
        }
    }

    /// Convert into center/radius form; an untouched accumulator yields zero bounds
    pub fn finalize(&self) -> Bounds {
        match &self.range {
            Some(range) if !range.is_empty() => Bounds {
                max: range.max,
                min: range.min,
                center: range.center(),
                radius: range.circumradius(),
            },
            _ => Bounds::zero(),
        }
    }
}

/// World-space box an object contributes to the collection bounds
pub fn object_extent(object: &SceneObject) -> Option<BoundingBox> {
    let (center, dimensions) = match &object.kind {
        ObjectKind::ShadowMesh(_) | ObjectKind::Untagged => return None,
        ObjectKind::SphereMarker { display_size } => {
            // display_size is a radius; the extent is a diameter
            let diameter = max_component(&(object.scale() * *display_size * 2.0));
            (object.location(), Vector3::repeat(diameter))
        }
        ObjectKind::BoxMarker => (object.location(), object.scale()),
        ObjectKind::CollisionMesh(_) => {
            let corners = object.local_bounds().corners();
            let sum = corners
                .iter()
                .fold(Vector3::zeros(), |acc, corner| acc + corner.coords);
            let local_center = Point3::from(sum / 8.0);
            let center = object.world_matrix().transform_point(&local_center);
            (center, object.dimensions())
        }
    };

    Some(BoundingBox::from_center_extent(&center, &dimensions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PolyMesh;
    use approx::assert_relative_eq;

    #[test]
    fn test_untouched_accumulator_finalizes_to_zero() {
        assert_eq!(BoundsAccumulator::new().finalize(), Bounds::zero());
    }

    #[test]
    fn test_box_marker_at_origin() {
        let mut acc = BoundsAccumulator::new();
        acc.include_object(&SceneObject::new("box", ObjectKind::BoxMarker));
        let bounds = acc.finalize();

        assert_eq!(bounds.min, Point3::new(-0.5, -0.5, -0.5));
        assert_eq!(bounds.max, Point3::new(0.5, 0.5, 0.5));
        assert_eq!(bounds.center, Point3::origin());
        assert_relative_eq!(bounds.radius, 3.0f32.sqrt() / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_box_marker_extent_is_scale() {
        let obj = SceneObject::new("box", ObjectKind::BoxMarker)
            .with_location(Vector3::new(1.0, 0.0, 0.0))
            .with_scale(Vector3::new(2.0, 2.0, 4.0));
        let extent = object_extent(&obj).unwrap();
        assert_eq!(extent.min, Point3::new(0.0, -1.0, -2.0));
        assert_eq!(extent.max, Point3::new(2.0, 1.0, 2.0));
    }

    #[test]
    fn test_unit_cube_mesh_at_origin() {
        let mut acc = BoundsAccumulator::new();
        acc.include_object(&SceneObject::new(
            "cube",
            ObjectKind::CollisionMesh(PolyMesh::cuboid(Vector3::new(2.0, 2.0, 2.0))),
        ));
        let bounds = acc.finalize();

        assert_eq!(bounds.min, Point3::new(-1.0, -1.0, -1.0));
        assert_eq!(bounds.max, Point3::new(1.0, 1.0, 1.0));
        assert_eq!(bounds.center, Point3::origin());
        assert_relative_eq!(bounds.radius, 3.0f32.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn test_sphere_marker_uses_largest_scale() {
        let sphere = SceneObject::new("s", ObjectKind::SphereMarker { display_size: 2.0 })
            .with_location(Vector3::new(10.0, 0.0, 0.0))
            .with_scale(Vector3::new(1.0, 3.0, 0.5));
        let extent = object_extent(&sphere).unwrap();
        assert_eq!(extent.min, Point3::new(4.0, -6.0, -6.0));
        assert_eq!(extent.max, Point3::new(16.0, 6.0, 6.0));
    }

    #[test]
    fn test_mesh_center_is_transformed() {
        let mut mesh = PolyMesh::cuboid(Vector3::new(2.0, 2.0, 2.0));
        for v in &mut mesh.vertices {
            v.x += 5.0;
        }
        let obj = SceneObject::new("m", ObjectKind::CollisionMesh(mesh))
            .with_location(Vector3::new(0.0, 0.0, 3.0));
        let extent = object_extent(&obj).unwrap();
        assert_eq!(extent.center(), Point3::new(5.0, 0.0, 3.0));
        assert_eq!(extent.size(), Vector3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_shadow_mesh_is_excluded() {
        let shadow = SceneObject::new(
            "shadow",
            ObjectKind::ShadowMesh(PolyMesh::cuboid(Vector3::new(100.0, 100.0, 100.0))),
        );
        assert!(object_extent(&shadow).is_none());

        let mut acc = BoundsAccumulator::new();
        acc.include_object(&shadow);
        assert!(!acc.is_initialized());
    }

    #[test]
    fn test_seeded_bounds_grow() {
        let mut acc = BoundsAccumulator::seeded(Point3::new(-5.0, -5.0, -5.0), Point3::new(0.0, 0.0, 0.0));
        acc.include_object(&SceneObject::new("box", ObjectKind::BoxMarker));
        let bounds = acc.finalize();
        assert_eq!(bounds.min, Point3::new(-5.0, -5.0, -5.0));
        assert_eq!(bounds.max, Point3::new(0.5, 0.5, 0.5));
        assert_eq!(bounds.center, Point3::new(-2.25, -2.25, -2.25));
    }
}
