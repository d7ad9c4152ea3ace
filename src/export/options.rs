// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Export configuration

use crate::error::Result;
use crate::model::ColVersion;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file looked up by [`ExportOptions::load`]
pub const CONFIG_FILE: &str = "colforge.toml";

/// Options for one export invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// COL format version (1, 2 or 3)
    pub version: u32,
    /// Root collection name; every top-level collection when unset
    pub collection: Option<String>,
    /// Only export selected objects
    pub only_selected: bool,
    /// Write output here instead of returning it
    pub file_name: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            version: 3,
            collection: None,
            only_selected: false,
            file_name: None,
        }
    }
}

impl ExportOptions {
    pub fn new(version: u32) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    pub fn with_collection(mut self, name: impl Into<String>) -> Self {
        self.collection = Some(name.into());
        self
    }

    pub fn with_only_selected(mut self, only_selected: bool) -> Self {
        self.only_selected = only_selected;
        self
    }

    pub fn with_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_name = Some(path.into());
        self
    }

    /// Load options from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `colforge.toml` when present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut options = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        options.apply_env();
        Ok(options)
    }

    /// Apply `COLFORGE_*` environment overrides
    pub fn apply_env(&mut self) {
        if let Some(version) = std::env::var("COLFORGE_VERSION")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.version = version;
        }

        if let Ok(collection) = std::env::var("COLFORGE_COLLECTION") {
            self.collection = Some(collection);
        }

        if let Ok(only_selected) = std::env::var("COLFORGE_ONLY_SELECTED") {
            self.only_selected = only_selected.parse().unwrap_or(false);
        }

        if let Ok(output) = std::env::var("COLFORGE_OUTPUT") {
            self.file_name = Some(PathBuf::from(output));
        }
    }

    /// The configured version, rejecting anything outside 1..=3
    pub fn col_version(&self) -> Result<ColVersion> {
        ColVersion::from_number(self.version)
    }
}
