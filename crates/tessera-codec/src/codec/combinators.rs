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

//! Combinators that assemble larger codecs out of smaller ones.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use super::Codec;
use crate::error::CodecError;
use crate::ops::FormatOps;

/// Codec for homogeneous lists; built with [`Codec::list_of`].
#[derive(Debug, Clone, Copy)]
pub struct ListCodec<C> {
    element: C,
}

impl<C> ListCodec<C> {
    pub(super) fn new(element: C) -> Self {
        Self { element }
    }
}

impl<T, C: Codec<T>> Codec<Vec<T>> for ListCodec<C> {
    fn encode<F: FormatOps>(&self, ops: &F, value: &Vec<T>) -> Result<F::Value, CodecError> {
        let elements = value
            .iter()
            .map(|item| self.element.encode(ops, item))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ops.create_list(elements))
    }

    fn decode<F: FormatOps>(&self, ops: &F, input: &F::Value) -> Result<Vec<T>, CodecError> {
        let elements = ops
            .get_list(input)
            .ok_or_else(|| CodecError::expected("list"))?;
        elements
            .iter()
            .map(|item| self.element.decode(ops, item))
            .collect()
    }
}

/// Codec for homogeneous maps; built with [`map_of`].
///
/// Decoded maps are [`BTreeMap`]s so logical equality is order-insensitive;
/// encoding writes entries in key order.
#[derive(Debug, Clone, Copy)]
pub struct MapCodec<CK, CV> {
    key: CK,
    value: CV,
}

/// Builds the codec for a homogeneous map out of a key codec and a value
/// codec.
pub fn map_of<CK, CV>(key: CK, value: CV) -> MapCodec<CK, CV> {
    MapCodec { key, value }
}

impl<K, V, CK, CV> Codec<BTreeMap<K, V>> for MapCodec<CK, CV>
where
    K: Ord,
    CK: Codec<K>,
    CV: Codec<V>,
{
    fn encode<F: FormatOps>(
        &self,
        ops: &F,
        value: &BTreeMap<K, V>,
    ) -> Result<F::Value, CodecError> {
        let entries = value
            .iter()
            .map(|(k, v)| Ok((self.key.encode(ops, k)?, self.value.encode(ops, v)?)))
            .collect::<Result<Vec<_>, CodecError>>()?;
        Ok(ops.create_map(entries))
    }

    fn decode<F: FormatOps>(
        &self,
        ops: &F,
        input: &F::Value,
    ) -> Result<BTreeMap<K, V>, CodecError> {
        let entries = ops
            .get_map(input)
            .ok_or_else(|| CodecError::expected("map"))?;
        let mut out = BTreeMap::new();
        for (k, v) in &entries {
            out.insert(self.key.decode(ops, k)?, self.value.decode(ops, v)?);
        }
        Ok(out)
    }
}

/// Codec that substitutes a fixed value for any decode failure; built with
/// [`Codec::or_else`].
#[derive(Debug, Clone)]
pub struct OrElseCodec<T, C> {
    inner: C,
    fallback: T,
}

impl<T, C> OrElseCodec<T, C> {
    pub(super) fn new(inner: C, fallback: T) -> Self {
        Self { inner, fallback }
    }
}

impl<T: Clone, C: Codec<T>> Codec<T> for OrElseCodec<T, C> {
    fn encode<F: FormatOps>(&self, ops: &F, value: &T) -> Result<F::Value, CodecError> {
        self.inner.encode(ops, value)
    }

    fn decode<F: FormatOps>(&self, ops: &F, input: &F::Value) -> Result<T, CodecError> {
        match self.inner.decode(ops, input) {
            Ok(value) => Ok(value),
            Err(_) => Ok(self.fallback.clone()),
        }
    }
}

/// Codec for optional values; built with [`Codec::optional`].
///
/// `None` is carried as the format's [`FormatOps::empty`] value, which is
/// recognized before the inner codec runs.
#[derive(Debug, Clone, Copy)]
pub struct OptionalCodec<C> {
    inner: C,
}

impl<C> OptionalCodec<C> {
    pub(super) fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<T, C: Codec<T>> Codec<Option<T>> for OptionalCodec<C> {
    fn encode<F: FormatOps>(&self, ops: &F, value: &Option<T>) -> Result<F::Value, CodecError> {
        match value {
            Some(inner) => self.inner.encode(ops, inner),
            None => Ok(ops.empty()),
        }
    }

    fn decode<F: FormatOps>(&self, ops: &F, input: &F::Value) -> Result<Option<T>, CodecError> {
        if *input == ops.empty() {
            return Ok(None);
        }
        self.inner.decode(ops, input).map(Some)
    }
}

/// Codec that tries a secondary codec when the primary fails to decode;
/// built with [`fallback`]. Encoding always uses the primary.
#[derive(Debug, Clone, Copy)]
pub struct FallbackCodec<L, R> {
    primary: L,
    secondary: R,
}

/// Builds a codec that decodes with `primary` and, on failure, retries with
/// `secondary`.
pub fn fallback<L, R>(primary: L, secondary: R) -> FallbackCodec<L, R> {
    FallbackCodec { primary, secondary }
}

impl<T, L, R> Codec<T> for FallbackCodec<L, R>
where
    L: Codec<T>,
    R: Codec<T>,
{
    fn encode<F: FormatOps>(&self, ops: &F, value: &T) -> Result<F::Value, CodecError> {
        self.primary.encode(ops, value)
    }

    fn decode<F: FormatOps>(&self, ops: &F, input: &F::Value) -> Result<T, CodecError> {
        match self.primary.decode(ops, input) {
            Ok(value) => Ok(value),
            Err(_) => self.secondary.decode(ops, input),
        }
    }
}

/// Codec mapped to another logical type through a pure conversion pair;
/// built with [`Codec::xmap`].
#[derive(Debug, Clone, Copy)]
pub struct XmapCodec<T, C, Fwd, Back> {
    inner: C,
    forward: Fwd,
    backward: Back,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T, C, Fwd, Back> XmapCodec<T, C, Fwd, Back> {
    pub(super) fn new(inner: C, forward: Fwd, backward: Back) -> Self {
        Self {
            inner,
            forward,
            backward,
            _marker: PhantomData,
        }
    }
}

impl<T, U, C, Fwd, Back> Codec<U> for XmapCodec<T, C, Fwd, Back>
where
    C: Codec<T>,
    Fwd: Fn(&T) -> U,
    Back: Fn(&U) -> T,
{
    fn encode<F: FormatOps>(&self, ops: &F, value: &U) -> Result<F::Value, CodecError> {
        self.inner.encode(ops, &(self.backward)(value))
    }

    fn decode<F: FormatOps>(&self, ops: &F, input: &F::Value) -> Result<U, CodecError> {
        self.inner.decode(ops, input).map(|inner| (self.forward)(&inner))
    }
}
