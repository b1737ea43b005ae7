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

//! Ready-made block states for common blocks.
//!
//! Each state implements exactly the capabilities its block has, and is
//! also a worked example of how downstream code plugs its own state types
//! into the registry.

mod candle;
mod chest;
mod crop;
mod door;
mod furnace;
mod rail;
mod repeater;
mod vine;

pub use candle::CandleState;
pub use chest::ChestState;
pub use crop::CropState;
pub use door::DoorState;
pub use furnace::FurnaceState;
pub use rail::PoweredRailState;
pub use repeater::RepeaterState;
pub use vine::VineState;
