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

//! The capability adapter contract and the registry that aggregates
//! adapters into whole-state serialization.

use tessera_codec::{CodecError, FormatOps};

use crate::state::BlockState;

/// Serializes one capability's property through one format.
///
/// An adapter never knows concrete state types: it probes the state for its
/// capability and answers "not applicable" with `Ok(None)` / a no-op `load`
/// when the probe fails. Out-of-domain but well-formed values (an age past
/// `max_age`, a face the block cannot carry) are also a no-op on load;
/// only *malformed* input is an error.
pub trait CapabilityAdapter<F: FormatOps> {
    /// The property name this adapter reads and writes in the aggregate map.
    fn key(&self) -> &'static str;

    /// Encodes the property off `state`, or `Ok(None)` when the state does
    /// not carry this capability.
    fn save(&self, ops: &F, state: &dyn BlockState) -> Result<Option<F::Value>, CodecError>;

    /// Decodes `input` and applies it to `state`. A state without the
    /// capability, or a well-formed value outside the state's domain, is
    /// left untouched.
    fn load(&self, ops: &F, state: &mut dyn BlockState, input: &F::Value)
        -> Result<(), CodecError>;
}

/// An ordered collection of adapters, run as a unit against a state.
///
/// `save` produces one aggregate map containing an entry per applicable
/// capability; `load` walks an aggregate map and applies every entry it can,
/// skipping unknown keys and malformed values with a debug log rather than
/// failing the whole state.
pub struct AdapterRegistry<F: FormatOps> {
    adapters: Vec<Box<dyn CapabilityAdapter<F>>>,
}

impl<F: FormatOps> AdapterRegistry<F> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            adapters: Vec::new(),
        }
    }

    /// Adds an adapter. Adapters run in registration order on save.
    pub fn register(&mut self, adapter: impl CapabilityAdapter<F> + 'static) {
        self.adapters.push(Box::new(adapter));
    }

    /// Serializes every applicable capability of `state` into one aggregate
    /// map keyed by property name.
    pub fn save(&self, ops: &F, state: &dyn BlockState) -> Result<F::Value, CodecError> {
        let mut entries = Vec::new();
        for adapter in &self.adapters {
            if let Some(value) = adapter.save(ops, state)? {
                entries.push((ops.create_string(adapter.key()), value));
            }
        }
        Ok(ops.create_map(entries))
    }

    /// Applies an aggregate map produced by [`save`](Self::save) back onto
    /// `state`.
    ///
    /// Entries are applied independently: an unknown key, a non-string key,
    /// or a malformed value skips that one entry (with a debug log naming
    /// the block) and the rest still apply. Only a non-map `input` is an
    /// error.
    pub fn load(
        &self,
        ops: &F,
        state: &mut dyn BlockState,
        input: &F::Value,
    ) -> Result<(), CodecError> {
        let entries = ops
            .get_map(input)
            .ok_or_else(|| CodecError::expected("map"))?;
        for (key, value) in &entries {
            let Some(name) = ops.get_string(key) else {
                log::debug!("skipping non-string property key on {}", state.block_id());
                continue;
            };
            let Some(adapter) = self.adapters.iter().find(|a| a.key() == name) else {
                log::debug!("skipping unknown property {name} on {}", state.block_id());
                continue;
            };
            if let Err(err) = adapter.load(ops, state, value) {
                log::debug!(
                    "skipping malformed property {name} on {}: {err}",
                    state.block_id()
                );
            }
        }
        Ok(())
    }
}

impl<F: FormatOps> Default for AdapterRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}
