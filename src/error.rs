// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for collision export

use thiserror::Error;

/// Errors raised while building, encoding or writing collision models
#[derive(Debug, Error)]
pub enum ColError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported COL version {0} (expected 1, 2 or 3)")]
    UnsupportedVersion(u32),

    #[error("collection not found: {0}")]
    CollectionNotFound(String),

    #[error("{what} value {value} does not fit the target field (max {max})")]
    IndexOverflow {
        what: &'static str,
        value: usize,
        max: usize,
    },

    #[error("invalid scene description: {0}")]
    Scene(#[from] serde_json::Error),

    #[error("invalid export configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, ColError>;
