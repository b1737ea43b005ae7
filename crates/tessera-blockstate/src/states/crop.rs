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

use crate::capability::Ageable;
use crate::state::BlockState;

/// A growing crop, aging from 0 to 7.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CropState {
    age: i32,
}

impl CropState {
    /// A freshly planted crop.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ageable for CropState {
    fn age(&self) -> i32 {
        self.age
    }

    fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    fn max_age(&self) -> i32 {
        7
    }
}

impl BlockState for CropState {
    fn block_id(&self) -> &str {
        "wheat"
    }

    fn as_ageable(&self) -> Option<&dyn Ageable> {
        Some(self)
    }

    fn as_ageable_mut(&mut self) -> Option<&mut dyn Ageable> {
        Some(self)
    }
}
