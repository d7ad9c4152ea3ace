// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Binary encoder seam

use crate::error::Result;
use crate::model::CollisionModel;

/// Turns a finished collision model into bytes
pub trait Encoder {
    fn encode(&self, model: &CollisionModel) -> Result<Vec<u8>>;
}

impl<E: Encoder + ?Sized> Encoder for &E {
    fn encode(&self, model: &CollisionModel) -> Result<Vec<u8>> {
        (**self).encode(model)
    }
}
