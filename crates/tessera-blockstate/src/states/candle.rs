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

use crate::capability::{Candles, Lightable, Waterlogged};
use crate::state::BlockState;

/// A cluster of one to four candles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandleState {
    candles: i32,
    lit: bool,
    waterlogged: bool,
}

impl CandleState {
    /// A single unlit, dry candle.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for CandleState {
    fn default() -> Self {
        Self {
            candles: 1,
            lit: false,
            waterlogged: false,
        }
    }
}

impl Candles for CandleState {
    fn candles(&self) -> i32 {
        self.candles
    }

    fn set_candles(&mut self, candles: i32) {
        self.candles = candles;
    }

    fn max_candles(&self) -> i32 {
        4
    }
}

impl Lightable for CandleState {
    fn lit(&self) -> bool {
        self.lit
    }

    fn set_lit(&mut self, lit: bool) {
        self.lit = lit;
    }
}

impl Waterlogged for CandleState {
    fn waterlogged(&self) -> bool {
        self.waterlogged
    }

    fn set_waterlogged(&mut self, waterlogged: bool) {
        self.waterlogged = waterlogged;
    }
}

impl BlockState for CandleState {
    fn block_id(&self) -> &str {
        "candle"
    }

    fn as_candles(&self) -> Option<&dyn Candles> {
        Some(self)
    }

    fn as_candles_mut(&mut self) -> Option<&mut dyn Candles> {
        Some(self)
    }

    fn as_lightable(&self) -> Option<&dyn Lightable> {
        Some(self)
    }

    fn as_lightable_mut(&mut self) -> Option<&mut dyn Lightable> {
        Some(self)
    }

    fn as_waterlogged(&self) -> Option<&dyn Waterlogged> {
        Some(self)
    }

    fn as_waterlogged_mut(&mut self) -> Option<&mut dyn Waterlogged> {
        Some(self)
    }
}
