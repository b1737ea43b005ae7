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

use crate::capability::{Chested, Directional, Waterlogged};
use crate::enums::{ChestSide, Direction};
use crate::state::BlockState;

/// A chest: horizontally facing, joinable with a neighbor, and floodable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChestState {
    facing: Direction,
    side: ChestSide,
    waterlogged: bool,
}

impl ChestState {
    /// A dry, single chest facing north.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ChestState {
    fn default() -> Self {
        Self {
            facing: Direction::North,
            side: ChestSide::Single,
            waterlogged: false,
        }
    }
}

impl Directional for ChestState {
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

impl Chested for ChestState {
    fn chest_side(&self) -> ChestSide {
        self.side
    }

    fn set_chest_side(&mut self, side: ChestSide) {
        self.side = side;
    }
}

impl Waterlogged for ChestState {
    fn waterlogged(&self) -> bool {
        self.waterlogged
    }

    fn set_waterlogged(&mut self, waterlogged: bool) {
        self.waterlogged = waterlogged;
    }
}

impl BlockState for ChestState {
    fn block_id(&self) -> &str {
        "chest"
    }

    fn as_directional(&self) -> Option<&dyn Directional> {
        Some(self)
    }

    fn as_directional_mut(&mut self) -> Option<&mut dyn Directional> {
        Some(self)
    }

    fn as_chested(&self) -> Option<&dyn Chested> {
        Some(self)
    }

    fn as_chested_mut(&mut self) -> Option<&mut dyn Chested> {
        Some(self)
    }

    fn as_waterlogged(&self) -> Option<&dyn Waterlogged> {
        Some(self)
    }

    fn as_waterlogged_mut(&mut self) -> Option<&mut dyn Waterlogged> {
        Some(self)
    }
}
