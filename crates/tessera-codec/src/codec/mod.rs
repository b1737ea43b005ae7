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

//! Bidirectional transforms over the format algebra.
//!
//! A [`Codec`] carries a logical Rust value into and out of *any* format: it
//! is written once against [`FormatOps`] and therefore runs unmodified
//! against bytes, tags, JSON, grammar strings, and configuration trees.
//! Larger codecs are assembled from the primitive codecs here plus the
//! combinators in this module ([`map_of`], [`enum_of`], [`fallback`], and the
//! provided methods `list_of`, `or_else`, `optional`, `xmap`).

mod combinators;
mod record;

#[cfg(test)]
mod tests;

pub use combinators::{
    fallback, map_of, FallbackCodec, ListCodec, MapCodec, OptionalCodec, OrElseCodec, XmapCodec,
};
pub use record::{RecordBuilder, RecordView};

use uuid::Uuid;

use crate::error::CodecError;
use crate::ops::FormatOps;

/// A bidirectional transform between a logical value of type `T` and a
/// format value.
///
/// Both directions are pure: no codec holds mutable state, so any codec may
/// be shared freely across threads. Encoding a representable value succeeds;
/// decoding reports every failure as a [`CodecError`] rather than panicking.
pub trait Codec<T> {
    /// Encodes `value` into the given format.
    fn encode<F: FormatOps>(&self, ops: &F, value: &T) -> Result<F::Value, CodecError>;

    /// Decodes a logical value back out of the given format.
    fn decode<F: FormatOps>(&self, ops: &F, input: &F::Value) -> Result<T, CodecError>;

    /// Lifts this codec to a codec of homogeneous lists.
    fn list_of(self) -> ListCodec<Self>
    where
        Self: Sized,
    {
        ListCodec::new(self)
    }

    /// Wraps this codec so a decode failure yields `fallback` instead of an
    /// error. Encoding is unchanged.
    fn or_else(self, fallback: T) -> OrElseCodec<T, Self>
    where
        Self: Sized,
        T: Clone,
    {
        OrElseCodec::new(self, fallback)
    }

    /// Lifts this codec to `Option<T>`, mapping `None` to the format's
    /// [`FormatOps::empty`] value and back.
    fn optional(self) -> OptionalCodec<Self>
    where
        Self: Sized,
    {
        OptionalCodec::new(self)
    }

    /// Maps this codec to another logical type through a pure conversion
    /// pair: `forward` on decode, `backward` on encode.
    fn xmap<U, Fwd, Back>(self, forward: Fwd, backward: Back) -> XmapCodec<T, Self, Fwd, Back>
    where
        Self: Sized,
        Fwd: Fn(&T) -> U,
        Back: Fn(&U) -> T,
    {
        XmapCodec::new(self, forward, backward)
    }
}

macro_rules! primitive_codec {
    ($(#[$meta:meta])* $name:ident, $ty:ty, $create:ident, $get:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl Codec<$ty> for $name {
            fn encode<F: FormatOps>(&self, ops: &F, value: &$ty) -> Result<F::Value, CodecError> {
                Ok(ops.$create(*value))
            }

            fn decode<F: FormatOps>(&self, ops: &F, input: &F::Value) -> Result<$ty, CodecError> {
                ops.$get(input).ok_or_else(|| CodecError::expected($kind))
            }
        }
    };
}

primitive_codec!(
    /// Codec for 32-bit integers.
    IntCodec, i32, create_int, get_int, "int"
);
primitive_codec!(
    /// Codec for 64-bit integers.
    LongCodec, i64, create_long, get_long, "long"
);
primitive_codec!(
    /// Codec for 32-bit floats.
    FloatCodec, f32, create_float, get_float, "float"
);
primitive_codec!(
    /// Codec for 64-bit floats.
    DoubleCodec, f64, create_double, get_double, "double"
);
primitive_codec!(
    /// Codec for booleans.
    BoolCodec, bool, create_bool, get_bool, "bool"
);

/// Codec for UTF-8 strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCodec;

impl Codec<String> for StringCodec {
    fn encode<F: FormatOps>(&self, ops: &F, value: &String) -> Result<F::Value, CodecError> {
        Ok(ops.create_string(value))
    }

    fn decode<F: FormatOps>(&self, ops: &F, input: &F::Value) -> Result<String, CodecError> {
        ops.get_string(input)
            .ok_or_else(|| CodecError::expected("string"))
    }
}

/// Codec for [`Uuid`], carried as its canonical hyphenated text.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidCodec;

impl Codec<Uuid> for UuidCodec {
    fn encode<F: FormatOps>(&self, ops: &F, value: &Uuid) -> Result<F::Value, CodecError> {
        Ok(ops.create_string(&value.to_string()))
    }

    fn decode<F: FormatOps>(&self, ops: &F, input: &F::Value) -> Result<Uuid, CodecError> {
        let text = ops
            .get_string(input)
            .ok_or_else(|| CodecError::expected("string"))?;
        Uuid::parse_str(&text).map_err(|err| CodecError::new(format!("malformed UUID: {err}")))
    }
}

/// A finite set of named constants, serialized by name.
///
/// Implemented for free by [`tessera_enum!`](crate::tessera_enum); the only
/// contract is that `name` is injective over [`EnumValue::VARIANTS`].
pub trait EnumValue: Copy + PartialEq + Sized + 'static {
    /// Every constant of the set, in declaration order.
    const VARIANTS: &'static [Self];

    /// The wire name of this constant.
    fn name(&self) -> &'static str;
}

/// Codec for an [`EnumValue`] set, carried as the constant's name string.
#[derive(Debug, Clone, Copy)]
pub struct EnumCodec<E> {
    _marker: std::marker::PhantomData<fn(E) -> E>,
}

/// Builds the codec for an [`EnumValue`] set.
pub fn enum_of<E: EnumValue>() -> EnumCodec<E> {
    EnumCodec {
        _marker: std::marker::PhantomData,
    }
}

impl<E: EnumValue> Codec<E> for EnumCodec<E> {
    fn encode<F: FormatOps>(&self, ops: &F, value: &E) -> Result<F::Value, CodecError> {
        Ok(ops.create_string(value.name()))
    }

    fn decode<F: FormatOps>(&self, ops: &F, input: &F::Value) -> Result<E, CodecError> {
        let name = ops
            .get_string(input)
            .ok_or_else(|| CodecError::expected("string"))?;
        E::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.name() == name)
            .ok_or_else(|| CodecError::new(format!("unknown enum constant: {name}")))
    }
}

/// Declares a constant set together with its [`EnumValue`] implementation.
///
/// Each variant is paired with its wire name:
///
/// ```
/// tessera_codec::tessera_enum! {
///     /// A cardinal direction.
///     pub enum Compass {
///         North => "NORTH",
///         South => "SOUTH",
///     }
/// }
/// ```
#[macro_export]
macro_rules! tessera_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $(
                #[doc = concat!("The `", $label, "` constant.")]
                $variant,
            )+
        }

        impl $crate::codec::EnumValue for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }
    };
}
