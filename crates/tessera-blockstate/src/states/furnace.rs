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

use crate::capability::{Directional, Lightable};
use crate::enums::Direction;
use crate::state::BlockState;

/// A furnace: horizontally facing and lightable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FurnaceState {
    facing: Direction,
    lit: bool,
}

impl FurnaceState {
    /// An unlit furnace facing north.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for FurnaceState {
    fn default() -> Self {
        Self {
            facing: Direction::North,
            lit: false,
        }
    }
}

impl Directional for FurnaceState {
    fn facing(&self) -> Direction {
        self.facing
    }

    fn set_facing(&mut self, facing: Direction) {
        self.facing = facing;
    }

    fn allowed_faces(&self) -> &[Direction] {
        Direction::HORIZONTAL
    }
}

impl Lightable for FurnaceState {
    fn lit(&self) -> bool {
        self.lit
    }

    fn set_lit(&mut self, lit: bool) {
        self.lit = lit;
    }
}

impl BlockState for FurnaceState {
    fn block_id(&self) -> &str {
        "furnace"
    }

    fn as_directional(&self) -> Option<&dyn Directional> {
        Some(self)
    }

    fn as_directional_mut(&mut self) -> Option<&mut dyn Directional> {
        Some(self)
    }

    fn as_lightable(&self) -> Option<&dyn Lightable> {
        Some(self)
    }

    fn as_lightable_mut(&mut self) -> Option<&mut dyn Lightable> {
        Some(self)
    }
}
