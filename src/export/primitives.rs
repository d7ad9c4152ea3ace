// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Sphere and box markers converted to model primitives

use super::surface::surface_for;
use crate::model::{ColBox, Sphere};
use crate::scene::SceneObject;
use crate::utils::math::max_component;

/// Sphere marker to sphere primitive. Rotation is ignored.
pub fn sphere_from_marker(object: &SceneObject, display_size: f32) -> Sphere {
    Sphere {
        radius: max_component(&(object.scale() * display_size)),
        center: object.location(),
        surface: surface_for(object, None),
    }
}

/// Box marker to axis-aligned box primitive spanning `location ± scale`.
pub fn box_from_marker(object: &SceneObject) -> ColBox {
    let location = object.location();
    let scale = object.scale();
    ColBox {
        min: location - scale,
        max: location + scale,
        surface: surface_for(object, None),
    }
}
