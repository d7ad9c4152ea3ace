// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Flattening mesh objects into shared vertex/face buffers

use super::surface::surface_for;
use crate::geometry::{BoundingBox, PolyMesh};
use crate::model::{Face, FaceGroup, FaceLayout};
use crate::scene::SceneObject;
use nalgebra::Point3;

/// Initial face-group extent, matching the legacy compressed vertex range
const FACE_GROUP_LIMIT: f32 = 256.0;

/// Buffers one mesh is appended to
pub struct MeshTarget<'a> {
    pub vertices: &'a mut Vec<Point3<f32>>,
    pub faces: &'a mut Vec<Face>,
    /// Present only when the target format stores face groups
    pub face_groups: Option<&'a mut Vec<FaceGroup>>,
}

/// Open run of faces sharing one group tag
struct GroupRun {
    tag: i32,
    start: usize,
    bounds: BoundingBox,
}

impl GroupRun {
    fn open(tag: i32, start: usize) -> Self {
        Self {
            tag,
            start,
            bounds: BoundingBox::new(
                Point3::new(FACE_GROUP_LIMIT, FACE_GROUP_LIMIT, FACE_GROUP_LIMIT),
                Point3::new(-FACE_GROUP_LIMIT, -FACE_GROUP_LIMIT, -FACE_GROUP_LIMIT),
            ),
        }
    }

    fn close(self, end: usize) -> FaceGroup {
        log::debug!(
            "face group {}: faces {}..={}",
            self.tag,
            self.start,
            end
        );
        FaceGroup {
            bounds: self.bounds,
            start: self.start,
            end,
        }
    }
}

/// Triangulate `mesh` and append it to `target`.
///
/// Vertices are appended in mesh order after the current buffer length, faces
/// are emitted with their second and third corners swapped, and face groups
/// (when requested and the mesh carries a group layer) partition the new faces
/// into runs of equal tag.
pub fn process_mesh(
    object: &SceneObject,
    mesh: &PolyMesh,
    layout: FaceLayout,
    target: MeshTarget<'_>,
) {
    let MeshTarget {
        vertices,
        faces,
        face_groups,
    } = target;

    let triangles = mesh.triangulate();

    let vert_offset = vertices.len();
    vertices.extend_from_slice(&mesh.vertices);

    let mut face_groups = face_groups.filter(|_| mesh.has_face_groups());
    let face_offset = faces.len();
    let last = triangles.len().saturating_sub(1);
    let mut current: Option<GroupRun> = None;

    faces.reserve(triangles.len());
    for (i, triangle) in triangles.iter().enumerate() {
        let face_index = face_offset + i;

        if let Some(groups) = face_groups.as_deref_mut() {
            let tag = triangle.face_group.unwrap_or(0);
            // the final face always closes the open run, whatever its tag
            let mut run = match current.take() {
                Some(run) if run.tag == tag || i == last => run,
                Some(run) => {
                    groups.push(run.close(face_index - 1));
                    GroupRun::open(tag, face_index)
                }
                None => GroupRun::open(tag, face_index),
            };

            for &v in &triangle.indices {
                run.bounds.expand_to_include(&mesh.vertices[v]);
            }

            if i == last {
                groups.push(run.close(face_index));
            } else {
                current = Some(run);
            }
        }

        let [a, b, c] = triangle.indices;
        let surface = surface_for(object, Some(triangle.material_index));
        faces.push(Face {
            indices: [vert_offset + a, vert_offset + c, vert_offset + b],
            surface: layout.surface(surface),
        });
    }

    log::debug!(
        "{}: {} vertices, {} faces",
        object.name,
        mesh.vertices.len(),
        triangles.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Polygon;
    use crate::model::{FaceSurface, Surface};
    use crate::scene::{Material, ObjectKind};
    use nalgebra::Vector3;

    fn strip(tags: &[i32]) -> PolyMesh {
        // One triangle per tag along the x axis
        let mut mesh = PolyMesh::new();
        for (i, &tag) in tags.iter().enumerate() {
            let x = i as f32;
            let a = mesh.add_vertex(Point3::new(x, 0.0, 0.0));
            let b = mesh.add_vertex(Point3::new(x + 1.0, 0.0, 0.0));
            let c = mesh.add_vertex(Point3::new(x, 1.0, 0.0));
            mesh.add_polygon(Polygon::new(vec![a, b, c]).with_face_group(tag));
        }
        mesh
    }

    fn run(mesh: &PolyMesh, groups: bool) -> (Vec<Point3<f32>>, Vec<Face>, Vec<FaceGroup>) {
        let object = SceneObject::new("m", ObjectKind::CollisionMesh(mesh.clone()));
        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        let mut face_groups = Vec::new();
        process_mesh(
            &object,
            mesh,
            FaceLayout::Compact,
            MeshTarget {
                vertices: &mut vertices,
                faces: &mut faces,
                face_groups: groups.then_some(&mut face_groups),
            },
        );
        (vertices, faces, face_groups)
    }

    #[test]
    fn test_winding_is_reversed() {
        let mesh = PolyMesh::from_triangles(
            vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
            &[[0, 1, 2]],
        );
        let (vertices, faces, groups) = run(&mesh, true);
        assert_eq!(vertices.len(), 3);
        assert_eq!(faces[0].indices, [0, 2, 1]);
        // No face-group layer on this mesh
        assert!(groups.is_empty());
    }

    #[test]
    fn test_shared_buffers_use_running_offset() {
        let first = PolyMesh::cuboid(Vector3::new(1.0, 1.0, 1.0));
        let second = strip(&[0, 0]);
        let object = SceneObject::new("m", ObjectKind::Untagged);

        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        for mesh in [&first, &second] {
            process_mesh(
                &object,
                mesh,
                FaceLayout::Full,
                MeshTarget {
                    vertices: &mut vertices,
                    faces: &mut faces,
                    face_groups: None,
                },
            );
        }

        assert_eq!(vertices.len(), 8 + 6);
        assert_eq!(faces.len(), 12 + 2);
        assert_eq!(faces[12].indices, [8, 10, 9]);
        assert_eq!(faces[13].indices, [11, 13, 12]);
        assert!(faces.iter().all(|f| f.indices.iter().all(|&i| i < vertices.len())));
    }

    #[test]
    fn test_face_groups_partition_runs() {
        let mesh = strip(&[0, 0, 1, 1, 1]);
        let (vertices, faces, groups) = run(&mesh, true);
        assert_eq!(faces.len(), 5);
        assert_eq!(groups.len(), 2);
        assert_eq!((groups[0].start, groups[0].end), (0, 1));
        assert_eq!((groups[1].start, groups[1].end), (2, 4));

        for group in &groups {
            for face in &faces[group.start..=group.end] {
                for &v in &face.indices {
                    let p = vertices[v];
                    let (lo, hi) = (group.bounds.min, group.bounds.max);
                    assert!((0..3).all(|k| p[k] >= lo[k] && p[k] <= hi[k]));
                }
            }
        }
        assert_eq!(groups[1].bounds.min, Point3::new(2.0, 0.0, 0.0));
        assert_eq!(groups[1].bounds.max, Point3::new(5.0, 1.0, 0.0));
    }

    #[test]
    fn test_last_face_closes_open_group() {
        let (vertices, faces, groups) = run(&strip(&[3, 3, 4]), true);
        assert_eq!(groups.len(), 1);
        assert_eq!((groups[0].start, groups[0].end), (0, 2));
        for face in &faces {
            for &v in &face.indices {
                let p = vertices[v];
                let (lo, hi) = (groups[0].bounds.min, groups[0].bounds.max);
                assert!((0..3).all(|k| p[k] >= lo[k] && p[k] <= hi[k]));
            }
        }
    }

    #[test]
    fn test_tag_change_before_last_face_splits() {
        let (_, _, groups) = run(&strip(&[0, 1, 1, 2]), true);
        let spans: Vec<(usize, usize)> = groups.iter().map(|g| (g.start, g.end)).collect();
        assert_eq!(spans, vec![(0, 0), (1, 3)]);
    }

    #[test]
    fn test_single_face_single_group() {
        let (_, _, groups) = run(&strip(&[7]), true);
        assert_eq!(groups.len(), 1);
        assert_eq!((groups[0].start, groups[0].end), (0, 0));
    }

    #[test]
    fn test_groups_skipped_without_buffer() {
        let (_, faces, groups) = run(&strip(&[0, 1]), false);
        assert_eq!(faces.len(), 2);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_face_surface_from_material_slot() {
        let mut mesh = strip(&[0]);
        mesh.polygons[0].material_index = 1;
        let object = SceneObject::new("m", ObjectKind::CollisionMesh(mesh.clone()))
            .with_material(None)
            .with_material(Some(Material::new("metal", Surface::new(5, 1, 2, 99))));

        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        process_mesh(
            &object,
            &mesh,
            FaceLayout::Compact,
            MeshTarget {
                vertices: &mut vertices,
                faces: &mut faces,
                face_groups: None,
            },
        );
        assert_eq!(faces[0].surface, FaceSurface::Compact { material: 5, light: 99 });
    }

    #[test]
    fn test_empty_mesh_appends_nothing() {
        let (vertices, faces, groups) = run(&PolyMesh::new(), true);
        assert!(vertices.is_empty() && faces.is_empty() && groups.is_empty());
    }
}
