// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - binary encoding and scene loading

mod col_writer;
mod encoder;
mod scene_json;

pub use col_writer::{
    ColWriter, FLAG_FACE_GROUPS, FLAG_NOT_EMPTY, FLAG_SHADOW_MESH, HEADER_SIZE, NAME_LENGTH,
    VERTEX_SCALE,
};
pub use encoder::Encoder;
pub use scene_json::{load_scene, parse_scene, scene_to_json};
