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

use crate::capability::{Powerable, Rail};
use crate::enums::RailShape;
use crate::state::BlockState;

/// A powered rail. Powered rails cannot curve, so the allowed shapes are
/// the straight subset; a curved shape in serialized data is ignored on
/// load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoweredRailState {
    shape: RailShape,
    powered: bool,
}

impl PoweredRailState {
    /// An unpowered north-south rail.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for PoweredRailState {
    fn default() -> Self {
        Self {
            shape: RailShape::NorthSouth,
            powered: false,
        }
    }
}

impl Rail for PoweredRailState {
    fn shape(&self) -> RailShape {
        self.shape
    }

    fn set_shape(&mut self, shape: RailShape) {
        self.shape = shape;
    }

    fn allowed_shapes(&self) -> &[RailShape] {
        RailShape::STRAIGHT
    }
}

impl Powerable for PoweredRailState {
    fn powered(&self) -> bool {
        self.powered
    }

    fn set_powered(&mut self, powered: bool) {
        self.powered = powered;
    }
}

impl BlockState for PoweredRailState {
    fn block_id(&self) -> &str {
        "powered_rail"
    }

    fn as_rail(&self) -> Option<&dyn Rail> {
        Some(self)
    }

    fn as_rail_mut(&mut self) -> Option<&mut dyn Rail> {
        Some(self)
    }

    fn as_powerable(&self) -> Option<&dyn Powerable> {
        Some(self)
    }

    fn as_powerable_mut(&mut self) -> Option<&mut dyn Powerable> {
        Some(self)
    }
}
