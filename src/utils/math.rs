// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

use nalgebra::{Point3, Vector3};

/// Per-axis minimum of two points
pub fn component_min(a: &Point3<f32>, b: &Point3<f32>) -> Point3<f32> {
    Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
}

/// Per-axis maximum of two points
pub fn component_max(a: &Point3<f32>, b: &Point3<f32>) -> Point3<f32> {
    Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
}

/// Largest component of a vector
pub fn max_component(v: &Vector3<f32>) -> f32 {
    v.x.max(v.y).max(v.z)
}

/// Calculate the (unnormalized) normal of a triangle given three vertices
pub fn triangle_normal(p0: &Point3<f32>, p1: &Point3<f32>, p2: &Point3<f32>) -> Vector3<f32> {
    (p1 - p0).cross(&(p2 - p0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_min_max() {
        let a = Point3::new(1.0, -2.0, 3.0);
        let b = Point3::new(-1.0, 2.0, 0.0);
        assert_eq!(component_min(&a, &b), Point3::new(-1.0, -2.0, 0.0));
        assert_eq!(component_max(&a, &b), Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_max_component() {
        assert_eq!(max_component(&Vector3::new(0.5, 3.0, -7.0)), 3.0);
    }

    #[test]
    fn test_triangle_normal() {
        let n = triangle_normal(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(n, Vector3::new(0.0, 0.0, 1.0));
    }
}
