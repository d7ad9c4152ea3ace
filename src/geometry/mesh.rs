// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polygon mesh representation and triangulation

use super::BoundingBox;
use crate::utils::math::triangle_normal;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Polygonal face referencing mesh-local vertex indices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<usize>,
    /// Material slot on the owning object
    #[serde(default)]
    pub material_index: usize,
    /// Face-group tag, `None` when the face was never tagged
    #[serde(default)]
    pub face_group: Option<i32>,
}

impl Polygon {
    pub fn new(vertices: Vec<usize>) -> Self {
        Self {
            vertices,
            material_index: 0,
            face_group: None,
        }
    }

    pub fn with_material(mut self, material_index: usize) -> Self {
        self.material_index = material_index;
        self
    }

    pub fn with_face_group(mut self, face_group: i32) -> Self {
        self.face_group = Some(face_group);
        self
    }
}

/// Triangle defined by three vertex indices, carrying its polygon's attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub indices: [usize; 3],
    pub material_index: usize,
    pub face_group: Option<i32>,
}

/// Polygonal mesh as supplied by the host scene
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolyMesh {
    pub vertices: Vec<Point3<f32>>,
    pub polygons: Vec<Polygon>,
}

impl PolyMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh from plain triangles
    pub fn from_triangles(vertices: Vec<Point3<f32>>, triangles: &[[usize; 3]]) -> Self {
        let polygons = triangles
            .iter()
            .map(|tri| Polygon::new(tri.to_vec()))
            .collect();
        Self { vertices, polygons }
    }

    /// Axis-aligned box made of six quads, centered on the origin
    pub fn cuboid(size: Vector3<f32>) -> Self {
        let h = size / 2.0;
        let vertices = vec![
            Point3::new(-h.x, -h.y, -h.z),
            Point3::new(h.x, -h.y, -h.z),
            Point3::new(h.x, h.y, -h.z),
            Point3::new(-h.x, h.y, -h.z),
            Point3::new(-h.x, -h.y, h.z),
            Point3::new(h.x, -h.y, h.z),
            Point3::new(h.x, h.y, h.z),
            Point3::new(-h.x, h.y, h.z),
        ];

        let quads = [
            [0, 3, 2, 1],
            [4, 5, 6, 7],
            [1, 2, 6, 5],
            [0, 4, 7, 3],
            [3, 7, 6, 2],
            [0, 1, 5, 4],
        ];

        let polygons = quads.iter().map(|q| Polygon::new(q.to_vec())).collect();
        Self { vertices, polygons }
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, position: Point3<f32>) -> usize {
        let index = self.vertices.len();
        self.vertices.push(position);
        index
    }

    pub fn add_polygon(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the mesh carries a face-group layer at all
    pub fn has_face_groups(&self) -> bool {
        self.polygons.iter().any(|p| p.face_group.is_some())
    }

    /// Local bounding box; an empty mesh reports a zero box at the origin
    pub fn bounding_box(&self) -> BoundingBox {
        if self.vertices.is_empty() {
            BoundingBox::zero()
        } else {
            BoundingBox::from_points(&self.vertices)
        }
    }

    /// Decompose every polygon into triangles, preserving polygon order
    pub fn triangulate(&self) -> Vec<Triangle> {
        let mut triangles = Vec::with_capacity(self.polygons.len() * 2);

        for (index, polygon) in self.polygons.iter().enumerate() {
            if polygon.vertices.len() < 3 {
                log::warn!(
                    "skipping polygon {} with {} vertices",
                    index,
                    polygon.vertices.len()
                );
                continue;
            }
            if let Some(&bad) = polygon.vertices.iter().find(|&&v| v >= self.vertices.len()) {
                log::warn!("skipping polygon {} referencing missing vertex {}", index, bad);
                continue;
            }

            for indices in triangulate_polygon(&self.vertices, &polygon.vertices) {
                triangles.push(Triangle {
                    indices,
                    material_index: polygon.material_index,
                    face_group: polygon.face_group,
                });
            }
        }

        triangles
    }
}

/// Ear-clip one polygon on its dominant plane. Falls back to a fan when
/// the outline is degenerate or no ear can be found.
fn triangulate_polygon(positions: &[Point3<f32>], polygon: &[usize]) -> Vec<[usize; 3]> {
    let n = polygon.len();
    if n == 3 {
        return vec![[polygon[0], polygon[1], polygon[2]]];
    }

    let (u, v) = projection_axes(&newell_normal(positions, polygon));
    let points: Vec<[f32; 2]> = polygon
        .iter()
        .map(|&i| [positions[i][u], positions[i][v]])
        .collect();

    let area = signed_area(&points);
    if area.abs() <= f32::EPSILON {
        return fan(polygon);
    }
    let orientation = area.signum();

    let mut remaining: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity(n - 2);

    while remaining.len() > 3 {
        let m = remaining.len();
        let ear = (1..=m).map(|k| k % m).find(|&pos| {
            let prev = remaining[(pos + m - 1) % m];
            let next = remaining[(pos + 1) % m];
            is_ear(&points, &remaining, prev, remaining[pos], next, orientation)
        });

        match ear {
            Some(pos) => {
                let prev = remaining[(pos + m - 1) % m];
                let next = remaining[(pos + 1) % m];
                triangles.push([polygon[prev], polygon[remaining[pos]], polygon[next]]);
                remaining.remove(pos);
            }
            None => {
                let rest: Vec<usize> = remaining.iter().map(|&r| polygon[r]).collect();
                triangles.extend(fan(&rest));
                return triangles;
            }
        }
    }

    triangles.push([
        polygon[remaining[0]],
        polygon[remaining[1]],
        polygon[remaining[2]],
    ]);
    triangles
}

fn fan(polygon: &[usize]) -> Vec<[usize; 3]> {
    (1..polygon.len() - 1)
        .map(|i| [polygon[0], polygon[i], polygon[i + 1]])
        .collect()
}

fn newell_normal(positions: &[Point3<f32>], polygon: &[usize]) -> Vector3<f32> {
    let origin = positions[polygon[0]];
    polygon
        .windows(2)
        .map(|w| triangle_normal(&origin, &positions[w[0]], &positions[w[1]]))
        .fold(Vector3::zeros(), |acc, n| acc + n)
}

/// Axes kept when projecting away the normal's dominant axis
fn projection_axes(normal: &Vector3<f32>) -> (usize, usize) {
    let a = normal.abs();
    if a.z >= a.x && a.z >= a.y {
        (0, 1)
    } else if a.x >= a.y {
        (1, 2)
    } else {
        (2, 0)
    }
}

fn signed_area(points: &[[f32; 2]]) -> f32 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let [x0, y0] = points[i];
            let [x1, y1] = points[(i + 1) % n];
            x0 * y1 - x1 * y0
        })
        .sum::<f32>()
        / 2.0
}

fn cross2(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> f32 {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

fn is_ear(
    points: &[[f32; 2]],
    remaining: &[usize],
    prev: usize,
    cur: usize,
    next: usize,
    orientation: f32,
) -> bool {
    let (a, b, c) = (points[prev], points[cur], points[next]);
    if cross2(a, b, c) * orientation <= 0.0 {
        return false;
    }

    remaining
        .iter()
        .filter(|&&r| r != prev && r != cur && r != next)
        .map(|&r| points[r])
        .filter(|&p| p != a && p != b && p != c)
        .all(|p| {
            let d0 = cross2(a, b, p) * orientation;
            let d1 = cross2(b, c, p) * orientation;
            let d2 = cross2(c, a, p) * orientation;
            d0 < 0.0 || d1 < 0.0 || d2 < 0.0
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> PolyMesh {
        let mut mesh = PolyMesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(1.0, 1.0, 0.0));
        mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        mesh.add_polygon(Polygon::new(vec![0, 1, 2, 3]).with_material(2).with_face_group(7));
        mesh
    }

    #[test]
    fn test_triangle_passes_through() {
        let mesh = PolyMesh::from_triangles(
            vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
            &[[0, 1, 2]],
        );
        let tris = mesh.triangulate();
        assert_eq!(tris.len(), 1);
        assert_eq!(tris[0].indices, [0, 1, 2]);
    }

    #[test]
    fn test_quad_becomes_fan_and_keeps_attributes() {
        let tris = square().triangulate();
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[0].indices, [0, 1, 2]);
        assert_eq!(tris[1].indices, [0, 2, 3]);
        assert!(tris.iter().all(|t| t.material_index == 2 && t.face_group == Some(7)));
    }

    #[test]
    fn test_concave_polygon_avoids_reflex_ear() {
        // Arrow shape with a reflex vertex at index 3
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(4.0, 4.0, 0.0),
            Point3::new(2.0, 1.0, 0.0),
            Point3::new(0.0, 4.0, 0.0),
        ];
        let mut mesh = PolyMesh::new();
        mesh.vertices = vertices.clone();
        mesh.add_polygon(Polygon::new(vec![0, 1, 2, 3, 4]));

        let tris = mesh.triangulate();
        assert_eq!(tris.len(), 3);

        // Total triangle area must equal the polygon area (16 - 6 = 10)
        let area: f32 = tris
            .iter()
            .map(|t| {
                let [a, b, c] = t.indices;
                triangle_normal(&vertices[a], &vertices[b], &vertices[c]).norm() / 2.0
            })
            .sum();
        assert!((area - 10.0).abs() < 1e-4, "area was {}", area);
    }

    #[test]
    fn test_cuboid_triangulates_to_twelve() {
        let mesh = PolyMesh::cuboid(Vector3::new(2.0, 2.0, 2.0));
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangulate().len(), 12);
    }

    #[test]
    fn test_degenerate_polygons_are_skipped() {
        let mut mesh = square();
        mesh.add_polygon(Polygon::new(vec![0, 1]));
        mesh.add_polygon(Polygon::new(vec![0, 1, 9]));
        assert_eq!(mesh.triangulate().len(), 2);
    }

    #[test]
    fn test_empty_mesh_bounds_are_zero() {
        assert_eq!(PolyMesh::new().bounding_box(), BoundingBox::zero());
        assert!(!PolyMesh::new().has_face_groups());
    }
}
