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

//! The structured-tag tree format algebra.
//!
//! [`Tag`] is the crate's native typed tree: one leaf node kind per
//! primitive, a homogeneous-by-convention list node, and an ordered compound
//! node keyed by strings. It is the natural target for hosts whose save
//! format is a typed tag structure.

use serde::{Deserialize, Serialize};

use super::FormatOps;

/// One node of the structured tag tree.
///
/// Booleans are carried as [`Tag::Byte`] (`0` = false, nonzero = true), the
/// convention of typed-tag save formats. [`Tag::End`] is the canonical
/// absent-value marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Tag {
    /// The absent-value marker.
    End,
    /// A single byte; also the carrier for booleans.
    Byte(i8),
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
    /// An ordered list of child tags.
    List(Vec<Tag>),
    /// An ordered, string-keyed compound of child tags.
    Compound(Vec<(String, Tag)>),
}

/// Format algebra over the [`Tag`] tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagOps;

impl FormatOps for TagOps {
    type Value = Tag;

    fn create_string(&self, value: &str) -> Tag {
        Tag::String(value.to_owned())
    }

    fn create_int(&self, value: i32) -> Tag {
        Tag::Int(value)
    }

    fn create_long(&self, value: i64) -> Tag {
        Tag::Long(value)
    }

    fn create_float(&self, value: f32) -> Tag {
        Tag::Float(value)
    }

    fn create_double(&self, value: f64) -> Tag {
        Tag::Double(value)
    }

    fn create_bool(&self, value: bool) -> Tag {
        Tag::Byte(i8::from(value))
    }

    fn create_list(&self, elements: Vec<Tag>) -> Tag {
        Tag::List(elements)
    }

    fn create_map(&self, entries: Vec<(Tag, Tag)>) -> Tag {
        // Compound keys are strings; entries whose key tag is not a string
        // cannot be represented and are skipped.
        let fields = entries
            .into_iter()
            .filter_map(|(key, value)| match key {
                Tag::String(name) => Some((name, value)),
                _ => None,
            })
            .collect();
        Tag::Compound(fields)
    }

    fn get_string(&self, input: &Tag) -> Option<String> {
        match input {
            Tag::String(value) => Some(value.clone()),
            _ => None,
        }
    }

    fn get_int(&self, input: &Tag) -> Option<i32> {
        match input {
            Tag::Int(value) => Some(*value),
            _ => None,
        }
    }

    fn get_long(&self, input: &Tag) -> Option<i64> {
        match input {
            Tag::Long(value) => Some(*value),
            _ => None,
        }
    }

    fn get_float(&self, input: &Tag) -> Option<f32> {
        match input {
            Tag::Float(value) => Some(*value),
            _ => None,
        }
    }

    fn get_double(&self, input: &Tag) -> Option<f64> {
        match input {
            Tag::Double(value) => Some(*value),
            _ => None,
        }
    }

    fn get_bool(&self, input: &Tag) -> Option<bool> {
        match input {
            Tag::Byte(value) => Some(*value != 0),
            _ => None,
        }
    }

    fn get_list(&self, input: &Tag) -> Option<Vec<Tag>> {
        match input {
            Tag::List(elements) => Some(elements.clone()),
            _ => None,
        }
    }

    fn get_map(&self, input: &Tag) -> Option<Vec<(Tag, Tag)>> {
        match input {
            Tag::Compound(fields) => Some(
                fields
                    .iter()
                    .map(|(key, value)| (Tag::String(key.clone()), value.clone()))
                    .collect(),
            ),
            _ => None,
        }
    }

    fn empty(&self) -> Tag {
        Tag::End
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_round_trip() {
        let ops = TagOps;
        assert_eq!(ops.get_int(&ops.create_int(i32::MIN)), Some(i32::MIN));
        assert_eq!(ops.get_long(&ops.create_long(-7)), Some(-7));
        assert_eq!(ops.get_float(&ops.create_float(0.5)), Some(0.5));
        assert_eq!(ops.get_double(&ops.create_double(8.125)), Some(8.125));
        assert_eq!(ops.get_bool(&ops.create_bool(true)), Some(true));
        assert_eq!(ops.get_string(&ops.create_string("")).as_deref(), Some(""));
    }

    #[test]
    fn kind_probing_returns_none_instead_of_coercing() {
        let ops = TagOps;
        let long = ops.create_long(1);
        assert_eq!(ops.get_int(&long), None, "a Long tag is not an Int");
        assert_eq!(ops.get_double(&ops.create_float(1.0)), None);
        assert_eq!(ops.get_string(&Tag::End), None);
    }

    #[test]
    fn compounds_are_string_keyed_and_ordered() {
        let ops = TagOps;
        let map = ops.create_map(vec![
            (ops.create_string("z"), ops.create_int(26)),
            (ops.create_int(1), ops.create_int(1)), // non-string key: dropped
            (ops.create_string("a"), ops.create_int(1)),
        ]);
        let entries = ops.get_map(&map).expect("compound should read back");
        assert_eq!(entries.len(), 2, "the non-string key must be skipped");
        assert_eq!(ops.get_string(&entries[0].0).as_deref(), Some("z"));
        assert_eq!(ops.get_string(&entries[1].0).as_deref(), Some("a"));
    }

    #[test]
    fn empty_is_the_end_tag() {
        let ops = TagOps;
        assert_eq!(ops.empty(), Tag::End);
        assert_eq!(ops.get_map(&Tag::End), None);
    }
}
