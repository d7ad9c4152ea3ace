// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Collision model element types

use crate::error::{ColError, Result};
use crate::geometry::BoundingBox;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// COL container version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColVersion {
    V1,
    V2,
    V3,
}

impl ColVersion {
    pub fn from_number(version: u32) -> Result<Self> {
        match version {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            3 => Ok(Self::V3),
            other => Err(ColError::UnsupportedVersion(other)),
        }
    }

    pub fn number(self) -> u32 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
            Self::V3 => 3,
        }
    }

    pub fn fourcc(self) -> &'static [u8; 4] {
        match self {
            Self::V1 => b"COLL",
            Self::V2 => b"COL2",
            Self::V3 => b"COL3",
        }
    }

    /// Face groups only exist past the first revision
    pub fn supports_face_groups(self) -> bool {
        self != Self::V1
    }

    pub fn face_layout(self) -> FaceLayout {
        match self {
            Self::V1 => FaceLayout::Full,
            Self::V2 | Self::V3 => FaceLayout::Compact,
        }
    }
}

/// Physical surface properties of a face or primitive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    #[serde(default)]
    pub material: u8,
    #[serde(default)]
    pub flags: u8,
    #[serde(default)]
    pub brightness: u8,
    #[serde(default)]
    pub light: u8,
}

impl Surface {
    pub fn new(material: u8, flags: u8, brightness: u8, light: u8) -> Self {
        Self {
            material,
            flags,
            brightness,
            light,
        }
    }
}

/// Shape of per-face surface data, fixed by the model version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FaceLayout {
    Full,
    Compact,
}

impl FaceLayout {
    pub fn surface(self, surface: Surface) -> FaceSurface {
        match self {
            Self::Full => FaceSurface::Full(surface),
            Self::Compact => FaceSurface::Compact {
                material: surface.material,
                light: surface.light,
            },
        }
    }
}

/// Surface data stored on a face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FaceSurface {
    Full(Surface),
    Compact { material: u8, light: u8 },
}

impl FaceSurface {
    pub fn material(&self) -> u8 {
        match self {
            Self::Full(surface) => surface.material,
            Self::Compact { material, .. } => *material,
        }
    }

    pub fn light(&self) -> u8 {
        match self {
            Self::Full(surface) => surface.light,
            Self::Compact { light, .. } => *light,
        }
    }
}

/// Triangle referencing the matching vertex buffer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Face {
    pub indices: [usize; 3],
    pub surface: FaceSurface,
}

/// Contiguous run of faces sharing a group tag, with their bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceGroup {
    pub bounds: BoundingBox,
    /// First face of the run
    pub start: usize,
    /// Last face of the run (inclusive)
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sphere {
    pub radius: f32,
    pub center: Point3<f32>,
    pub surface: Surface,
}

/// Axis-aligned box primitive
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColBox {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
    pub surface: Surface,
}

/// Finalized model bounds in both box and sphere form
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub max: Point3<f32>,
    pub min: Point3<f32>,
    pub center: Point3<f32>,
    pub radius: f32,
}

impl Bounds {
    pub fn zero() -> Self {
        Self {
            max: Point3::origin(),
            min: Point3::origin(),
            center: Point3::origin(),
            radius: 0.0,
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::zero()
    }
}
