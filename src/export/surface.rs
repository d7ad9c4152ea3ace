// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Surface extraction from material slots

use crate::model::Surface;
use crate::scene::SceneObject;

/// Surface for a material slot of `object`, or the object-level surface when
/// no slot is given. Missing slots and empty slots yield the zero surface.
pub fn surface_for(object: &SceneObject, material_slot: Option<usize>) -> Surface {
    match material_slot {
        None => object.surface,
        Some(slot) => object
            .materials
            .get(slot)
            .and_then(Option::as_ref)
            .map(|material| material.surface)
            .unwrap_or_default(),
    }
}
