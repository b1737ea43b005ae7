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

//! The format algebra: the contract every concrete serialization format
//! implements, plus the five implementations shipped with the crate.

mod byte;
mod json;
mod tag;
mod text;
mod tree;

pub use byte::ByteOps;
pub use json::JsonOps;
pub use tag::{Tag, TagOps};
pub use text::TextOps;
pub use tree::{TreeOps, TreeValue};

/// The fixed contract a concrete serialization format must supply.
///
/// `Value` is the opaque, format-specific representation of one encoded unit
/// (a byte buffer, a JSON node, a tag, a string token). Codec logic never
/// inspects a `Value` directly; it only moves values through these
/// operations, which is what makes a single codec run unmodified against
/// every format.
///
/// # Contract
///
/// - For every primitive kind, `get(create(x)) == Some(x)` (round-trip law,
///   format-specific bit/text representation aside).
/// - Extractors signal "not this kind" by returning `None`. They never panic,
///   even on arbitrarily malformed input. Type discrimination is by probing,
///   not by a stored tag.
/// - Maps are carried as ordered entry lists because format values are not
///   generally hashable; construction preserves the insertion order it is
///   given.
///
/// Implementations are stateless unit structs, safe for unsynchronized
/// concurrent use from any number of threads.
pub trait FormatOps {
    /// The opaque per-format representation of one encoded unit.
    type Value: Clone + PartialEq;

    /// Creates a string value.
    fn create_string(&self, value: &str) -> Self::Value;
    /// Creates a 32-bit integer value.
    fn create_int(&self, value: i32) -> Self::Value;
    /// Creates a 64-bit integer value.
    fn create_long(&self, value: i64) -> Self::Value;
    /// Creates a 32-bit float value.
    fn create_float(&self, value: f32) -> Self::Value;
    /// Creates a 64-bit float value.
    fn create_double(&self, value: f64) -> Self::Value;
    /// Creates a boolean value.
    fn create_bool(&self, value: bool) -> Self::Value;
    /// Creates a list from an ordered sequence of values.
    fn create_list(&self, elements: Vec<Self::Value>) -> Self::Value;
    /// Creates a map from ordered key/value entries.
    fn create_map(&self, entries: Vec<(Self::Value, Self::Value)>) -> Self::Value;

    /// Extracts a string, or `None` if the value is not of that kind.
    fn get_string(&self, input: &Self::Value) -> Option<String>;
    /// Extracts a 32-bit integer, or `None` if the value is not of that kind.
    fn get_int(&self, input: &Self::Value) -> Option<i32>;
    /// Extracts a 64-bit integer, or `None` if the value is not of that kind.
    fn get_long(&self, input: &Self::Value) -> Option<i64>;
    /// Extracts a 32-bit float, or `None` if the value is not of that kind.
    fn get_float(&self, input: &Self::Value) -> Option<f32>;
    /// Extracts a 64-bit float, or `None` if the value is not of that kind.
    fn get_double(&self, input: &Self::Value) -> Option<f64>;
    /// Extracts a boolean, or `None` if the value is not of that kind.
    fn get_bool(&self, input: &Self::Value) -> Option<bool>;
    /// Extracts the elements of a list, or `None` if the value is not a list.
    fn get_list(&self, input: &Self::Value) -> Option<Vec<Self::Value>>;
    /// Extracts the ordered entries of a map, or `None` if the value is not
    /// a map.
    fn get_map(&self, input: &Self::Value) -> Option<Vec<(Self::Value, Self::Value)>>;

    /// The canonical "no value" value of this format.
    fn empty(&self) -> Self::Value;
}
