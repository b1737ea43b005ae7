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

//! The capability traits a block state may implement.
//!
//! Each trait models exactly one serializable property. A state exposes the
//! capabilities it has through the `as_*` accessors on
//! [`BlockState`](crate::state::BlockState); everything else in the crate
//! only ever talks to these traits, never to concrete state types.
//!
//! Bounded integer capabilities expose their domain (`max_*`, and a lower
//! bound where it is not zero) so adapters can refuse out-of-range values
//! uniformly.

use tessera_codec::EnumValue;

use crate::enums::{
    AttachFace, Axis, BedHalf, ChestSide, ComparatorMode, Direction, Half, Hinge, RailShape,
    SlabKind, StairShape,
};

/// A state that matures over time, like a crop.
pub trait Ageable {
    /// The current age, in `0..=max_age()`.
    fn age(&self) -> i32;
    /// Sets the current age.
    fn set_age(&mut self, age: i32);
    /// The oldest this state can get.
    fn max_age(&self) -> i32;
}

/// A state carrying an analogue signal strength.
pub trait AnaloguePowerable {
    /// The current signal strength, in `0..=max_power()`.
    fn power(&self) -> i32;
    /// Sets the signal strength.
    fn set_power(&mut self, power: i32);
    /// The strongest representable signal.
    fn max_power(&self) -> i32 {
        15
    }
}

/// A state that can be attached to another block, like a tripwire hook.
pub trait Attachable {
    /// Whether the state is attached.
    fn attached(&self) -> bool;
    /// Sets the attachment flag.
    fn set_attached(&mut self, attached: bool);
}

/// A two-block-tall state, like a door or tall plant.
pub trait Bisected {
    /// Which half this state is.
    fn half(&self) -> Half;
    /// Sets which half this state is.
    fn set_half(&mut self, half: Half);
}

/// A state facing a single direction.
pub trait Directional {
    /// The direction the state faces.
    fn facing(&self) -> Direction;
    /// Sets the facing direction.
    fn set_facing(&mut self, facing: Direction);
    /// The directions this state may legally face.
    fn allowed_faces(&self) -> &[Direction] {
        Direction::VARIANTS
    }
}

/// A state mounted on a floor, wall, or ceiling, like a lever.
pub trait FaceAttachable {
    /// The surface the state is mounted on.
    fn attach_face(&self) -> AttachFace;
    /// Sets the mounting surface.
    fn set_attach_face(&mut self, face: AttachFace);
}

/// A state that can hang from the block above, like a lantern.
pub trait Hangable {
    /// Whether the state hangs.
    fn hanging(&self) -> bool;
    /// Sets the hanging flag.
    fn set_hanging(&mut self, hanging: bool);
}

/// A state that incubates, like a turtle egg.
pub trait Hatchable {
    /// The current hatch progress, in `0..=max_hatch()`.
    fn hatch(&self) -> i32;
    /// Sets the hatch progress.
    fn set_hatch(&mut self, hatch: i32);
    /// The progress at which hatching completes.
    fn max_hatch(&self) -> i32;
}

/// A state holding a fluid or fill level, like a cauldron.
pub trait Levelled {
    /// The current level, in `0..=max_level()`.
    fn level(&self) -> i32;
    /// Sets the level.
    fn set_level(&mut self, level: i32);
    /// The fullest level.
    fn max_level(&self) -> i32;
}

/// A state that can be lit, like a furnace or campfire.
pub trait Lightable {
    /// Whether the state is lit.
    fn lit(&self) -> bool;
    /// Sets the lit flag.
    fn set_lit(&mut self, lit: bool);
}

/// A state with independently toggleable faces, like vines or a mushroom
/// block.
pub trait MultipleFacing {
    /// Whether the given face is present.
    fn has_face(&self, face: Direction) -> bool;
    /// Adds or removes the given face.
    fn set_face(&mut self, face: Direction, present: bool);
    /// The faces this state may legally carry.
    fn allowed_faces(&self) -> &[Direction] {
        Direction::VARIANTS
    }
}

/// A state that opens and closes, like a door or trapdoor.
pub trait Openable {
    /// Whether the state is open.
    fn open(&self) -> bool;
    /// Sets the open flag.
    fn set_open(&mut self, open: bool);
}

/// A state aligned along an axis, like a log or chain.
pub trait Orientable {
    /// The axis the state is aligned with.
    fn axis(&self) -> Axis;
    /// Sets the alignment axis.
    fn set_axis(&mut self, axis: Axis);
    /// The axes this state may legally align with.
    fn allowed_axes(&self) -> &[Axis] {
        Axis::VARIANTS
    }
}

/// A state with a binary powered flag, like a button or pressure plate.
pub trait Powerable {
    /// Whether the state is powered.
    fn powered(&self) -> bool;
    /// Sets the powered flag.
    fn set_powered(&mut self, powered: bool);
}

/// A rail state with a track shape.
pub trait Rail {
    /// The current track shape.
    fn shape(&self) -> RailShape;
    /// Sets the track shape.
    fn set_shape(&mut self, shape: RailShape);
    /// The shapes this rail may legally take.
    fn allowed_shapes(&self) -> &[RailShape] {
        RailShape::VARIANTS
    }
}

/// A freely rotatable state, like a sign or banner.
pub trait Rotatable {
    /// The current rotation.
    fn rotation(&self) -> Direction;
    /// Sets the rotation.
    fn set_rotation(&mut self, rotation: Direction);
}

/// A state that can carry a snow cap, like grass or podzol.
pub trait Snowable {
    /// Whether the state is snow-covered.
    fn snowy(&self) -> bool;
    /// Sets the snow cover flag.
    fn set_snowy(&mut self, snowy: bool);
}

/// A state that can be flooded with water.
pub trait Waterlogged {
    /// Whether the state is waterlogged.
    fn waterlogged(&self) -> bool;
    /// Sets the waterlogged flag.
    fn set_waterlogged(&mut self, waterlogged: bool);
}

/// One end of a bed.
pub trait BedPart {
    /// Which end this state is.
    fn part(&self) -> BedHalf;
    /// Sets which end this state is.
    fn set_part(&mut self, part: BedHalf);
}

/// A chest that may join with a neighbor.
pub trait Chested {
    /// How this chest joins with its neighbor.
    fn chest_side(&self) -> ChestSide;
    /// Sets how this chest joins.
    fn set_chest_side(&mut self, side: ChestSide);
}

/// A door with a hinge side.
pub trait Hinged {
    /// The side the hinge is on.
    fn hinge(&self) -> Hinge;
    /// Sets the hinge side.
    fn set_hinge(&mut self, hinge: Hinge);
}

/// A slab occupying part or all of its block space.
pub trait Slabbed {
    /// The slab's occupancy.
    fn slab_kind(&self) -> SlabKind;
    /// Sets the slab's occupancy.
    fn set_slab_kind(&mut self, kind: SlabKind);
}

/// A stair with a corner shape.
pub trait Staired {
    /// The stair's corner shape.
    fn stair_shape(&self) -> StairShape;
    /// Sets the stair's corner shape.
    fn set_stair_shape(&mut self, shape: StairShape);
}

/// A comparator with an operating mode.
pub trait Comparator {
    /// The current operating mode.
    fn mode(&self) -> ComparatorMode;
    /// Sets the operating mode.
    fn set_mode(&mut self, mode: ComparatorMode);
}

/// A cluster of candles.
pub trait Candles {
    /// How many candles are present, in `1..=max_candles()`.
    fn candles(&self) -> i32;
    /// Sets the candle count.
    fn set_candles(&mut self, candles: i32);
    /// The largest cluster size.
    fn max_candles(&self) -> i32;
}

/// A cluster of sea pickles.
pub trait Pickled {
    /// How many pickles are present, in `1..=max_pickles()`.
    fn pickles(&self) -> i32;
    /// Sets the pickle count.
    fn set_pickles(&mut self, pickles: i32);
    /// The largest cluster size.
    fn max_pickles(&self) -> i32;
}

/// A stack of layers, like snow.
pub trait Layered {
    /// How many layers are present, in `1..=max_layers()`.
    fn layers(&self) -> i32;
    /// Sets the layer count.
    fn set_layers(&mut self, layers: i32);
    /// The tallest stack.
    fn max_layers(&self) -> i32;
}

/// Farmland-style soil with a moisture level.
pub trait Moisturised {
    /// The current moisture, in `0..=max_moisture()`.
    fn moisture(&self) -> i32;
    /// Sets the moisture level.
    fn set_moisture(&mut self, moisture: i32);
    /// The wettest level.
    fn max_moisture(&self) -> i32;
}

/// A repeater-style delay.
pub trait Delayed {
    /// The current delay, in `min_delay()..=max_delay()`.
    fn delay(&self) -> i32;
    /// Sets the delay.
    fn set_delay(&mut self, delay: i32);
    /// The shortest settable delay.
    fn min_delay(&self) -> i32 {
        1
    }
    /// The longest settable delay.
    fn max_delay(&self) -> i32 {
        4
    }
}
