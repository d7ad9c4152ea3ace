// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Collections and the scene tree

use super::SceneObject;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Custom-property key holding the minimum corner of previously imported bounds
pub const BOUNDS_MIN_KEY: &str = "bounds min";
/// Custom-property key holding the maximum corner of previously imported bounds
pub const BOUNDS_MAX_KEY: &str = "bounds max";

/// Custom property value stored on a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Vector(Vec<f64>),
    Text(String),
}

impl PropertyValue {
    pub fn as_point(&self) -> Option<Point3<f32>> {
        match self {
            Self::Vector(v) if v.len() == 3 => {
                Some(Point3::new(v[0] as f32, v[1] as f32, v[2] as f32))
            }
            _ => None,
        }
    }
}

impl From<Point3<f32>> for PropertyValue {
    fn from(p: Point3<f32>) -> Self {
        Self::Vector(vec![p.x as f64, p.y as f64, p.z as f64])
    }
}

/// Named group of objects with nested child collections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
    #[serde(default)]
    pub children: Vec<Collection>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_object(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    pub fn with_child(mut self, child: Collection) -> Self {
        self.children.push(child);
        self
    }

    /// Record bounds that survive with no live geometry
    pub fn with_stored_bounds(mut self, min: Point3<f32>, max: Point3<f32>) -> Self {
        self.properties.insert(BOUNDS_MIN_KEY.to_string(), min.into());
        self.properties.insert(BOUNDS_MAX_KEY.to_string(), max.into());
        self
    }

    /// Previously imported `(min, max)` bounds, when both corners are stored
    pub fn stored_bounds(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        let min = self.properties.get(BOUNDS_MIN_KEY)?.as_point()?;
        let max = self.properties.get(BOUNDS_MAX_KEY)?.as_point()?;
        Some((min, max))
    }

    /// Depth-first search of this collection and its descendants
    pub fn find(&self, name: &str) -> Option<&Collection> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }
}

/// Scene tree rooted at the scene collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub root: Collection,
}

impl Scene {
    pub fn new(root: Collection) -> Self {
        Self { root }
    }

    pub fn find_collection(&self, name: &str) -> Option<&Collection> {
        self.root.find(name)
    }

    pub fn top_level(&self) -> &[Collection] {
        &self.root.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_bounds_require_both_corners() {
        let mut coll = Collection::new("a");
        assert!(coll.stored_bounds().is_none());

        coll.properties
            .insert(BOUNDS_MIN_KEY.to_string(), PropertyValue::Vector(vec![-1.0, -2.0, -3.0]));
        assert!(coll.stored_bounds().is_none());

        let coll = coll.with_stored_bounds(Point3::new(-1.0, -2.0, -3.0), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(
            coll.stored_bounds(),
            Some((Point3::new(-1.0, -2.0, -3.0), Point3::new(1.0, 2.0, 3.0)))
        );
    }

    #[test]
    fn test_find_collection_depth_first() {
        let scene = Scene::new(
            Collection::new("Scene Collection")
                .with_child(Collection::new("vehicles").with_child(Collection::new("vehicles.sedan")))
                .with_child(Collection::new("props")),
        );
        assert_eq!(scene.find_collection("vehicles.sedan").map(|c| c.name.as_str()), Some("vehicles.sedan"));
        assert!(scene.find_collection("missing").is_none());
        assert_eq!(scene.top_level().len(), 2);
    }

    #[test]
    fn test_property_values_parse_untagged() {
        let props: BTreeMap<String, PropertyValue> =
            serde_json::from_str(r#"{"bounds min": [0.5, 1, 2], "note": "x", "count": 3}"#).unwrap();
        assert_eq!(props["bounds min"].as_point(), Some(Point3::new(0.5, 1.0, 2.0)));
        assert_eq!(props["count"], PropertyValue::Int(3));
        assert!(props["note"].as_point().is_none());
    }
}
