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

//! Helpers for record-shaped values: named, heterogeneously-typed fields
//! carried as one format map.
//!
//! [`RecordBuilder`] writes fields in declaration order; [`RecordView`]
//! reads them back by name, with required/optional semantics.

use super::Codec;
use crate::error::CodecError;
use crate::ops::FormatOps;

/// Incrementally builds a record as a format map.
pub struct RecordBuilder<'a, F: FormatOps> {
    ops: &'a F,
    entries: Vec<(F::Value, F::Value)>,
}

impl<'a, F: FormatOps> RecordBuilder<'a, F> {
    /// Starts an empty record against the given format.
    pub fn new(ops: &'a F) -> Self {
        Self {
            ops,
            entries: Vec::new(),
        }
    }

    /// Appends one named field.
    pub fn field<T>(
        mut self,
        name: &str,
        codec: &impl Codec<T>,
        value: &T,
    ) -> Result<Self, CodecError> {
        let encoded = codec.encode(self.ops, value)?;
        self.entries.push((self.ops.create_string(name), encoded));
        Ok(self)
    }

    /// Appends one named field when present; `None` writes nothing, so the
    /// key is simply absent from the record.
    pub fn optional_field<T>(
        self,
        name: &str,
        codec: &impl Codec<T>,
        value: &Option<T>,
    ) -> Result<Self, CodecError> {
        match value {
            Some(inner) => self.field(name, codec, inner),
            None => Ok(self),
        }
    }

    /// Finishes the record, producing the format map.
    pub fn build(self) -> F::Value {
        self.ops.create_map(self.entries)
    }
}

/// Reads the fields of a record back out of a format map by name.
pub struct RecordView<'a, F: FormatOps> {
    ops: &'a F,
    entries: Vec<(F::Value, F::Value)>,
}

impl<'a, F: FormatOps> RecordView<'a, F> {
    /// Opens `input` as a record, or fails if it is not a map.
    pub fn new(ops: &'a F, input: &F::Value) -> Result<Self, CodecError> {
        let entries = ops
            .get_map(input)
            .ok_or_else(|| CodecError::expected("map"))?;
        Ok(Self { ops, entries })
    }

    fn lookup(&self, name: &str) -> Option<&F::Value> {
        self.entries
            .iter()
            .find(|(key, _)| self.ops.get_string(key).as_deref() == Some(name))
            .map(|(_, value)| value)
    }

    /// Decodes a field that must be present and well-formed.
    pub fn required<T>(&self, name: &str, codec: &impl Codec<T>) -> Result<T, CodecError> {
        let value = self
            .lookup(name)
            .ok_or_else(|| CodecError::new(format!("missing required key: {name}")))?;
        codec.decode(self.ops, value)
    }

    /// Decodes a field, falling back to `default` when the key is absent or
    /// its value does not decode.
    pub fn optional<T>(&self, name: &str, codec: &impl Codec<T>, default: T) -> T {
        match self.lookup(name) {
            Some(value) => codec.decode(self.ops, value).unwrap_or(default),
            None => default,
        }
    }
}
