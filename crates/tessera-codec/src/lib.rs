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

//! # Tessera Codec
//!
//! Format-agnostic, bidirectional serialization core.
//!
//! The crate is built around two abstractions:
//!
//! - [`FormatOps`]: the *format algebra*, the fixed set of construct/extract
//!   operations a concrete serialization format must implement. Five algebras
//!   ship with the crate: [`ByteOps`] (length-prefixed binary), [`TagOps`]
//!   (a structured tag tree), [`JsonOps`] (a JSON tree), [`TextOps`] (a
//!   bracketed, human-authorable string grammar), and [`TreeOps`] (a generic
//!   key/value tree used for configuration data).
//! - [`Codec`]: a *transform*, a pure encode/decode pair written once against
//!   the algebra, which therefore runs unmodified against every format.
//!
//! A codec for a larger structure is assembled from the primitive codecs with
//! the combinators in [`codec`]: `list_of`, `map_of`, [`enum_of`], `or_else`,
//! `optional`, `xmap`, and the [`RecordBuilder`]/[`RecordView`] pair for
//! record-shaped values.
//!
//! Every algebra and every codec is stateless and safe for unsynchronized
//! concurrent use; all failures are synchronous [`CodecError`] return values.

#![warn(missing_docs)]

pub mod codec;
pub mod error;
pub mod ops;

pub use codec::{
    enum_of, fallback, map_of, BoolCodec, Codec, DoubleCodec, EnumValue, FloatCodec, IntCodec,
    LongCodec, RecordBuilder, RecordView, StringCodec, UuidCodec,
};
pub use error::CodecError;
pub use ops::{ByteOps, FormatOps, JsonOps, Tag, TagOps, TextOps, TreeOps, TreeValue};
