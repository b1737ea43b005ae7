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

use std::collections::BTreeSet;

use crate::capability::MultipleFacing;
use crate::enums::Direction;
use crate::state::BlockState;

/// A vine clinging to any subset of the four walls and the ceiling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VineState {
    faces: BTreeSet<Direction>,
}

const VINE_FACES: &[Direction] = &[
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
    Direction::Up,
];

impl VineState {
    /// A vine with no attached faces yet.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MultipleFacing for VineState {
    fn has_face(&self, face: Direction) -> bool {
        self.faces.contains(&face)
    }

    fn set_face(&mut self, face: Direction, present: bool) {
        if present {
            self.faces.insert(face);
        } else {
            self.faces.remove(&face);
        }
    }

    fn allowed_faces(&self) -> &[Direction] {
        VINE_FACES
    }
}

impl BlockState for VineState {
    fn block_id(&self) -> &str {
        "vine"
    }

    fn as_multiple_facing(&self) -> Option<&dyn MultipleFacing> {
        Some(self)
    }

    fn as_multiple_facing_mut(&mut self) -> Option<&mut dyn MultipleFacing> {
        Some(self)
    }
}
