// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Collision model definitions

mod collision;
mod types;

pub use collision::CollisionModel;
pub use types::{
    Bounds, ColBox, ColVersion, Face, FaceGroup, FaceLayout, FaceSurface, Sphere, Surface,
};
