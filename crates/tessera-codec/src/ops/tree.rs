// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The generic object tree format algebra, used for configuration data.
//!
//! [`TreeValue`] is a host-agnostic key/value tree: primitives pass through
//! unchanged, containers are ordered sequences and ordered maps. Map keys
//! are normalized to strings *inside* [`FormatOps::create_map`], so a tree
//! built programmatically presents the same key typing to later extraction
//! as one loaded from a file.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::FormatOps;

/// One node of the generic configuration tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeValue {
    /// The absent-value marker.
    Nil,
    /// A boolean leaf.
    Bool(bool),
    /// A 32-bit integer leaf.
    Int(i32),
    /// A 64-bit integer leaf.
    Long(i64),
    /// A 32-bit float leaf.
    Float(f32),
    /// A 64-bit float leaf.
    Double(f64),
    /// A UTF-8 string leaf.
    String(String),
    /// An ordered sequence of child nodes.
    List(Vec<TreeValue>),
    /// An ordered map; keys are always [`TreeValue::String`] by
    /// construction.
    Map(Vec<(TreeValue, TreeValue)>),
}

impl TreeValue {
    /// Builds a normalized tree from parsed configuration data.
    ///
    /// Integer-subtype numbers that fit become [`TreeValue::Int`], wider
    /// ones [`TreeValue::Long`]; float-subtype numbers become
    /// [`TreeValue::Double`]. Nested containers are normalized recursively,
    /// and every map key arrives as a string (JSON objects guarantee this;
    /// the constructor re-normalizes anyway so the guarantee does not hinge
    /// on the source format).
    pub fn from_json(node: &JsonValue) -> TreeValue {
        match node {
            JsonValue::Null => TreeValue::Nil,
            JsonValue::Bool(value) => TreeValue::Bool(*value),
            JsonValue::Number(number) => {
                if let Some(value) = number.as_i64() {
                    match i32::try_from(value) {
                        Ok(narrow) => TreeValue::Int(narrow),
                        Err(_) => TreeValue::Long(value),
                    }
                } else {
                    number.as_f64().map(TreeValue::Double).unwrap_or(TreeValue::Nil)
                }
            }
            JsonValue::String(value) => TreeValue::String(value.clone()),
            JsonValue::Array(elements) => {
                TreeValue::List(elements.iter().map(TreeValue::from_json).collect())
            }
            JsonValue::Object(fields) => TreeValue::Map(
                fields
                    .iter()
                    .map(|(key, value)| {
                        (TreeValue::String(key.clone()), TreeValue::from_json(value))
                    })
                    .collect(),
            ),
        }
    }

    /// Renders the tree back into configuration data.
    pub fn to_json(&self) -> JsonValue {
        match self {
            TreeValue::Nil => JsonValue::Null,
            TreeValue::Bool(value) => JsonValue::Bool(*value),
            TreeValue::Int(value) => JsonValue::from(*value),
            TreeValue::Long(value) => JsonValue::from(*value),
            TreeValue::Float(value) => serde_json::Number::from_f64(f64::from(*value))
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            TreeValue::Double(value) => serde_json::Number::from_f64(*value)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            TreeValue::String(value) => JsonValue::String(value.clone()),
            TreeValue::List(elements) => {
                JsonValue::Array(elements.iter().map(TreeValue::to_json).collect())
            }
            TreeValue::Map(entries) => {
                let mut object = serde_json::Map::new();
                for (key, value) in entries {
                    object.insert(key_text(key), value.to_json());
                }
                JsonValue::Object(object)
            }
        }
    }
}

/// Coerces an arbitrary node into map-key text. Strings pass through
/// unquoted; every other node renders as its configuration text.
fn key_text(key: &TreeValue) -> String {
    match key {
        TreeValue::String(text) => text.clone(),
        other => other.to_json().to_string(),
    }
}

/// Format algebra over the [`TreeValue`] tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeOps;

impl FormatOps for TreeOps {
    type Value = TreeValue;

    fn create_string(&self, value: &str) -> TreeValue {
        TreeValue::String(value.to_owned())
    }

    fn create_int(&self, value: i32) -> TreeValue {
        TreeValue::Int(value)
    }

    fn create_long(&self, value: i64) -> TreeValue {
        TreeValue::Long(value)
    }

    fn create_float(&self, value: f32) -> TreeValue {
        TreeValue::Float(value)
    }

    fn create_double(&self, value: f64) -> TreeValue {
        TreeValue::Double(value)
    }

    fn create_bool(&self, value: bool) -> TreeValue {
        TreeValue::Bool(value)
    }

    fn create_list(&self, elements: Vec<TreeValue>) -> TreeValue {
        TreeValue::List(elements)
    }

    fn create_map(&self, entries: Vec<(TreeValue, TreeValue)>) -> TreeValue {
        // Keys are normalized here, not only on load, so programmatically
        // built trees behave exactly like loaded ones.
        TreeValue::Map(
            entries
                .into_iter()
                .map(|(key, value)| (TreeValue::String(key_text(&key)), value))
                .collect(),
        )
    }

    fn get_string(&self, input: &TreeValue) -> Option<String> {
        match input {
            TreeValue::String(value) => Some(value.clone()),
            _ => None,
        }
    }

    fn get_int(&self, input: &TreeValue) -> Option<i32> {
        match input {
            TreeValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    fn get_long(&self, input: &TreeValue) -> Option<i64> {
        match input {
            TreeValue::Long(value) => Some(*value),
            _ => None,
        }
    }

    fn get_float(&self, input: &TreeValue) -> Option<f32> {
        match input {
            TreeValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    fn get_double(&self, input: &TreeValue) -> Option<f64> {
        match input {
            TreeValue::Double(value) => Some(*value),
            _ => None,
        }
    }

    fn get_bool(&self, input: &TreeValue) -> Option<bool> {
        match input {
            TreeValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    fn get_list(&self, input: &TreeValue) -> Option<Vec<TreeValue>> {
        match input {
            TreeValue::List(elements) => Some(elements.clone()),
            _ => None,
        }
    }

    fn get_map(&self, input: &TreeValue) -> Option<Vec<(TreeValue, TreeValue)>> {
        match input {
            TreeValue::Map(entries) => Some(entries.clone()),
            _ => None,
        }
    }

    fn empty(&self) -> TreeValue {
        TreeValue::Nil
    }
}
