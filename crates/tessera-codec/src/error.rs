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

//! Defines the single failure type produced by every transform in this crate.

use std::fmt;

/// A transform failure carrying a human-readable message.
///
/// Codecs raise this when a required extraction returns `None`, a required
/// record key is absent, or a decoded token has no valid interpretation
/// (e.g. an unknown enum constant). Format algebras themselves never raise:
/// a "wrong kind" extraction is an empty `Option`, and the codec layer is
/// responsible for turning that into a `CodecError` with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecError {
    message: String,
}

impl CodecError {
    /// Creates an error from any displayable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Convenience constructor for the common "wrong kind" decode failure.
    pub fn expected(kind: &str) -> Self {
        Self::new(format!("expected {kind}"))
    }

    /// The human-readable failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CodecError {}
