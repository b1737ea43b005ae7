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

use crate::capability::{Bisected, Directional, Hinged, Openable, Powerable};
use crate::enums::{Direction, Half, Hinge};
use crate::state::BlockState;

/// A door: two blocks tall, hinged, and openable by hand or redstone.
///
/// Doors only face horizontally, which makes this the worked example for a
/// restricted [`Directional`] domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoorState {
    half: Half,
    facing: Direction,
    hinge: Hinge,
    open: bool,
    powered: bool,
}

impl DoorState {
    /// A closed, unpowered bottom half facing north.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for DoorState {
    fn default() -> Self {
        Self {
            half: Half::Bottom,
            facing: Direction::North,
            hinge: Hinge::Left,
            open: false,
            powered: false,
        }
    }
}

impl Bisected for DoorState {
    fn half(&self) -> Half {
        self.half
    }

    fn set_half(&mut self, half: Half) {
        self.half = half;
    }
}

impl Directional for DoorState {
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

impl Hinged for DoorState {
    fn hinge(&self) -> Hinge {
        self.hinge
    }

    fn set_hinge(&mut self, hinge: Hinge) {
        self.hinge = hinge;
    }
}

impl Openable for DoorState {
    fn open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}

impl Powerable for DoorState {
    fn powered(&self) -> bool {
        self.powered
    }

    fn set_powered(&mut self, powered: bool) {
        self.powered = powered;
    }
}

impl BlockState for DoorState {
    fn block_id(&self) -> &str {
        "oak_door"
    }

    fn as_bisected(&self) -> Option<&dyn Bisected> {
        Some(self)
    }

    fn as_bisected_mut(&mut self) -> Option<&mut dyn Bisected> {
        Some(self)
    }

    fn as_directional(&self) -> Option<&dyn Directional> {
        Some(self)
    }

    fn as_directional_mut(&mut self) -> Option<&mut dyn Directional> {
        Some(self)
    }

    fn as_hinged(&self) -> Option<&dyn Hinged> {
        Some(self)
    }

    fn as_hinged_mut(&mut self) -> Option<&mut dyn Hinged> {
        Some(self)
    }

    fn as_openable(&self) -> Option<&dyn Openable> {
        Some(self)
    }

    fn as_openable_mut(&mut self) -> Option<&mut dyn Openable> {
        Some(self)
    }

    fn as_powerable(&self) -> Option<&dyn Powerable> {
        Some(self)
    }

    fn as_powerable_mut(&mut self) -> Option<&mut dyn Powerable> {
        Some(self)
    }
}
