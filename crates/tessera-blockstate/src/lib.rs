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

//! # Tessera Blockstate
//!
//! Capability-driven block state serialization on top of
//! [`tessera-codec`](tessera_codec).
//!
//! A block state is an opaque object probed through [`BlockState`]'s
//! capability accessors: a door answers to `as_openable`, a crop to
//! `as_ageable`, and so on. Each capability has a [`CapabilityAdapter`] that
//! knows how to carry that one property through any serialization format,
//! and an [`AdapterRegistry`] runs every registered adapter against a state
//! to produce (or consume) a single aggregate map keyed by property name.
//!
//! Because adapters are written against the format algebra, the same
//! registry serializes a state to bytes, JSON, tags, grammar strings, or
//! configuration trees without modification.

#![warn(missing_docs)]

pub mod adapter;
pub mod adapters;
pub mod capability;
pub mod enums;
pub mod state;
pub mod states;

#[cfg(test)]
mod tests;

pub use adapter::{AdapterRegistry, CapabilityAdapter};
pub use state::BlockState;
