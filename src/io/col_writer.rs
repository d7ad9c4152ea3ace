// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! COLL / COL2 / COL3 binary writer

use super::Encoder;
use crate::error::{ColError, Result};
use crate::model::{
    Bounds, ColBox, ColVersion, CollisionModel, Face, FaceGroup, FaceSurface, Sphere, Surface,
};
use nalgebra::Point3;

/// Length of the fixed model name field
pub const NAME_LENGTH: usize = 22;
/// FourCC + size + name + model id
pub const HEADER_SIZE: usize = 4 + 4 + NAME_LENGTH + 2;
/// Fixed-point scale of compressed vertices
pub const VERTEX_SCALE: f32 = 128.0;

pub const FLAG_NOT_EMPTY: u32 = 0x02;
pub const FLAG_FACE_GROUPS: u32 = 0x08;
pub const FLAG_SHADOW_MESH: u32 = 0x10;

/// Reference encoder for the legacy COL container
#[derive(Debug, Clone, Copy, Default)]
pub struct ColWriter;

impl Encoder for ColWriter {
    fn encode(&self, model: &CollisionModel) -> Result<Vec<u8>> {
        let mut out = Buffer::default();
        out.bytes(model.version.fourcc());
        out.u32(0); // size, patched below
        out.name(&model.model_name);
        out.u16(0); // model id

        match model.version {
            ColVersion::V1 => write_v1_body(&mut out, model)?,
            ColVersion::V2 | ColVersion::V3 => write_v2_body(&mut out, model)?,
        }

        let size = out.len() - 8;
        out.patch_u32(4, to_u32(size, "entry size")?);
        Ok(out.into_inner())
    }
}

fn write_v1_body(out: &mut Buffer, model: &CollisionModel) -> Result<()> {
    let Bounds {
        max,
        min,
        center,
        radius,
    } = model.bounds;
    out.f32(radius);
    out.point(&center);
    out.point(&min);
    out.point(&max);

    out.u32(to_u32(model.spheres.len(), "sphere count")?);
    for sphere in &model.spheres {
        out.f32(sphere.radius);
        out.point(&sphere.center);
        out.surface(&sphere.surface);
    }

    out.u32(0); // lines

    out.u32(to_u32(model.boxes.len(), "box count")?);
    for col_box in &model.boxes {
        write_box(out, col_box);
    }

    out.u32(to_u32(model.mesh_vertices.len(), "vertex count")?);
    for vertex in &model.mesh_vertices {
        out.point(vertex);
    }

    out.u32(to_u32(model.mesh_faces.len(), "face count")?);
    for face in &model.mesh_faces {
        for &index in &face.indices {
            out.u32(to_u32(index, "vertex index")?);
        }
        out.surface(&full_surface(&face.surface));
    }
    Ok(())
}

fn write_v2_body(out: &mut Buffer, model: &CollisionModel) -> Result<()> {
    let v3 = model.version == ColVersion::V3;

    let Bounds {
        max,
        min,
        center,
        radius,
    } = model.bounds;
    out.point(&min);
    out.point(&max);
    out.point(&center);
    out.f32(radius);

    out.u16(to_u16(model.spheres.len(), "sphere count")?);
    out.u16(to_u16(model.boxes.len(), "box count")?);
    out.u16(to_u16(model.mesh_faces.len(), "face count")?);
    out.u8(0); // lines
    out.u8(0);

    let mut flags = 0;
    if !model.is_empty() {
        flags |= FLAG_NOT_EMPTY;
    }
    if !model.face_groups.is_empty() {
        flags |= FLAG_FACE_GROUPS;
    }
    if v3 && model.has_shadow_mesh() {
        flags |= FLAG_SHADOW_MESH;
    }
    out.u32(flags);

    // Offset table, filled once section positions are known
    let offsets_at = out.len();
    let offset_count = if v3 { 6 + 3 } else { 6 };
    for _ in 0..offset_count {
        out.u32(0);
    }

    let spheres_at = section(out, !model.spheres.is_empty(), |out| {
        for sphere in &model.spheres {
            write_sphere(out, sphere);
        }
    });

    let boxes_at = section(out, !model.boxes.is_empty(), |out| {
        for col_box in &model.boxes {
            write_box(out, col_box);
        }
    });

    let vertices_at = section(out, !model.mesh_vertices.is_empty(), |out| {
        write_compressed_vertices(out, &model.mesh_vertices);
    });

    if !model.face_groups.is_empty() {
        for group in &model.face_groups {
            write_face_group(out, group)?;
        }
        out.u32(to_u32(model.face_groups.len(), "face group count")?);
    }

    let faces_at = out.len();
    write_compact_faces(out, &model.mesh_faces)?;
    let faces_at = if model.mesh_faces.is_empty() { 0 } else { faces_at };

    out.patch_u32(offsets_at, relative(spheres_at));
    out.patch_u32(offsets_at + 4, relative(boxes_at));
    out.patch_u32(offsets_at + 8, 0); // lines
    out.patch_u32(offsets_at + 12, relative(vertices_at));
    out.patch_u32(offsets_at + 16, relative(faces_at));
    out.patch_u32(offsets_at + 20, 0); // triangle planes

    if v3 {
        let shadow_vertices_at = section(out, !model.shadow_vertices.is_empty(), |out| {
            write_compressed_vertices(out, &model.shadow_vertices);
        });
        let shadow_faces_at = out.len();
        write_compact_faces(out, &model.shadow_faces)?;
        let shadow_faces_at = if model.shadow_faces.is_empty() {
            0
        } else {
            shadow_faces_at
        };

        out.patch_u32(offsets_at + 24, to_u32(model.shadow_faces.len(), "shadow face count")?);
        out.patch_u32(offsets_at + 28, relative(shadow_vertices_at));
        out.patch_u32(offsets_at + 32, relative(shadow_faces_at));
    }

    Ok(())
}

/// Write a section when present, returning its start (0 when absent)
fn section(out: &mut Buffer, present: bool, write: impl FnOnce(&mut Buffer)) -> usize {
    if !present {
        return 0;
    }
    let at = out.len();
    write(out);
    at
}

/// Offsets are stored relative to the entry start plus four
fn relative(at: usize) -> u32 {
    if at == 0 {
        0
    } else {
        (at - 4) as u32
    }
}

fn write_sphere(out: &mut Buffer, sphere: &Sphere) {
    out.point(&sphere.center);
    out.f32(sphere.radius);
    out.surface(&sphere.surface);
}

fn write_box(out: &mut Buffer, col_box: &ColBox) {
    out.point(&col_box.min);
    out.point(&col_box.max);
    out.surface(&col_box.surface);
}

fn write_face_group(out: &mut Buffer, group: &FaceGroup) -> Result<()> {
    out.point(&group.bounds.min);
    out.point(&group.bounds.max);
    out.u16(to_u16(group.start, "face group start")?);
    out.u16(to_u16(group.end, "face group end")?);
    Ok(())
}

fn write_compressed_vertices(out: &mut Buffer, vertices: &[Point3<f32>]) {
    let mut clamped = 0usize;
    for vertex in vertices {
        for &component in vertex.coords.iter() {
            let scaled = (component * VERTEX_SCALE).round();
            if scaled < i16::MIN as f32 || scaled > i16::MAX as f32 {
                clamped += 1;
            }
            out.i16(scaled.clamp(i16::MIN as f32, i16::MAX as f32) as i16);
        }
    }
    if clamped > 0 {
        log::warn!("{} vertex components clamped to the compressed range", clamped);
    }
    out.align(4);
}

fn write_compact_faces(out: &mut Buffer, faces: &[Face]) -> Result<()> {
    for face in faces {
        for &index in &face.indices {
            out.u16(to_u16(index, "vertex index")?);
        }
        out.u8(face.surface.material());
        out.u8(face.surface.light());
    }
    Ok(())
}

fn full_surface(surface: &FaceSurface) -> Surface {
    match surface {
        FaceSurface::Full(surface) => *surface,
        FaceSurface::Compact { material, light } => Surface::new(*material, 0, 0, *light),
    }
}

fn to_u16(value: usize, what: &'static str) -> Result<u16> {
    u16::try_from(value).map_err(|_| ColError::IndexOverflow {
        what,
        value,
        max: u16::MAX as usize,
    })
}

fn to_u32(value: usize, what: &'static str) -> Result<u32> {
    u32::try_from(value).map_err(|_| ColError::IndexOverflow {
        what,
        value,
        max: u32::MAX as usize,
    })
}

/// Little-endian byte sink
#[derive(Default)]
struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn into_inner(self) -> Vec<u8> {
        self.data
    }

    fn bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    fn u8(&mut self, v: u8) {
        self.data.push(v);
    }

    fn u16(&mut self, v: u16) {
        self.bytes(&v.to_le_bytes());
    }

    fn i16(&mut self, v: i16) {
        self.bytes(&v.to_le_bytes());
    }

    fn u32(&mut self, v: u32) {
        self.bytes(&v.to_le_bytes());
    }

    fn f32(&mut self, v: f32) {
        self.bytes(&v.to_le_bytes());
    }

    fn point(&mut self, p: &Point3<f32>) {
        self.f32(p.x);
        self.f32(p.y);
        self.f32(p.z);
    }

    fn surface(&mut self, s: &Surface) {
        self.bytes(&[s.material, s.flags, s.brightness, s.light]);
    }

    /// NUL-padded fixed-length name, truncated to fit
    fn name(&mut self, name: &str) {
        let mut field = [0u8; NAME_LENGTH];
        let bytes = name.as_bytes();
        let len = bytes.len().min(NAME_LENGTH);
        field[..len].copy_from_slice(&bytes[..len]);
        self.bytes(&field);
    }

    fn align(&mut self, to: usize) {
        while self.data.len() % to != 0 {
            self.data.push(0);
        }
    }

    fn patch_u32(&mut self, at: usize, v: u32) {
        self.data[at..at + 4].copy_from_slice(&v.to_le_bytes());
    }
}
