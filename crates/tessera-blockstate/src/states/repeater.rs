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

use crate::capability::{Delayed, Directional, Powerable};
use crate::enums::Direction;
use crate::state::BlockState;

/// A redstone repeater with a 1 to 4 tick delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeaterState {
    delay: i32,
    facing: Direction,
    powered: bool,
}

impl RepeaterState {
    /// An unpowered repeater on its shortest delay, facing north.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for RepeaterState {
    fn default() -> Self {
        Self {
            delay: 1,
            facing: Direction::North,
            powered: false,
        }
    }
}

impl Delayed for RepeaterState {
    fn delay(&self) -> i32 {
        self.delay
    }

    fn set_delay(&mut self, delay: i32) {
        self.delay = delay;
    }
}

impl Directional for RepeaterState {
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

impl Powerable for RepeaterState {
    fn powered(&self) -> bool {
        self.powered
    }

    fn set_powered(&mut self, powered: bool) {
        self.powered = powered;
    }
}

impl BlockState for RepeaterState {
    fn block_id(&self) -> &str {
        "repeater"
    }

    fn as_delayed(&self) -> Option<&dyn Delayed> {
        Some(self)
    }

    fn as_delayed_mut(&mut self) -> Option<&mut dyn Delayed> {
        Some(self)
    }

    fn as_directional(&self) -> Option<&dyn Directional> {
        Some(self)
    }

    fn as_directional_mut(&mut self) -> Option<&mut dyn Directional> {
        Some(self)
    }

    fn as_powerable(&self) -> Option<&dyn Powerable> {
        Some(self)
    }

    fn as_powerable_mut(&mut self) -> Option<&mut dyn Powerable> {
        Some(self)
    }
}
