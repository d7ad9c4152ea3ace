// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene graph data supplied by the host application

mod collection;
mod object;

pub use collection::{Collection, PropertyValue, Scene, BOUNDS_MAX_KEY, BOUNDS_MIN_KEY};
pub use object::{Material, ObjectKind, SceneObject, Transform};
