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

//! The block state abstraction.
//!
//! [`BlockState`] is probed structurally: every capability has an `as_*`
//! accessor pair that defaults to `None`, and a concrete state overrides
//! exactly the pairs for the capabilities it carries. Serialization code
//! never downcasts a state; it only asks.

use crate::capability::{
    Ageable, AnaloguePowerable, Attachable, BedPart, Bisected, Candles, Chested, Comparator,
    Delayed, Directional, FaceAttachable, Hangable, Hatchable, Hinged, Layered, Levelled,
    Lightable, Moisturised, MultipleFacing, Openable, Orientable, Pickled, Powerable, Rail,
    Rotatable, Slabbed, Snowable, Staired, Waterlogged,
};

/// One placed block's state, exposed capability by capability.
///
/// Implementors override the accessor pairs for the capabilities they have;
/// the defaults answer `None`, which serialization code reads as "this
/// property does not exist on this block".
pub trait BlockState {
    /// The stable identifier of the block this state belongs to, used in
    /// diagnostics.
    fn block_id(&self) -> &str;

    /// Probes for [`Ageable`].
    fn as_ageable(&self) -> Option<&dyn Ageable> {
        None
    }
    /// Mutably probes for [`Ageable`].
    fn as_ageable_mut(&mut self) -> Option<&mut dyn Ageable> {
        None
    }

    /// Probes for [`AnaloguePowerable`].
    fn as_analogue_powerable(&self) -> Option<&dyn AnaloguePowerable> {
        None
    }
    /// Mutably probes for [`AnaloguePowerable`].
    fn as_analogue_powerable_mut(&mut self) -> Option<&mut dyn AnaloguePowerable> {
        None
    }

    /// Probes for [`Attachable`].
    fn as_attachable(&self) -> Option<&dyn Attachable> {
        None
    }
    /// Mutably probes for [`Attachable`].
    fn as_attachable_mut(&mut self) -> Option<&mut dyn Attachable> {
        None
    }

    /// Probes for [`Bisected`].
    fn as_bisected(&self) -> Option<&dyn Bisected> {
        None
    }
    /// Mutably probes for [`Bisected`].
    fn as_bisected_mut(&mut self) -> Option<&mut dyn Bisected> {
        None
    }

    /// Probes for [`Directional`].
    fn as_directional(&self) -> Option<&dyn Directional> {
        None
    }
    /// Mutably probes for [`Directional`].
    fn as_directional_mut(&mut self) -> Option<&mut dyn Directional> {
        None
    }

    /// Probes for [`FaceAttachable`].
    fn as_face_attachable(&self) -> Option<&dyn FaceAttachable> {
        None
    }
    /// Mutably probes for [`FaceAttachable`].
    fn as_face_attachable_mut(&mut self) -> Option<&mut dyn FaceAttachable> {
        None
    }

    /// Probes for [`Hangable`].
    fn as_hangable(&self) -> Option<&dyn Hangable> {
        None
    }
    /// Mutably probes for [`Hangable`].
    fn as_hangable_mut(&mut self) -> Option<&mut dyn Hangable> {
        None
    }

    /// Probes for [`Hatchable`].
    fn as_hatchable(&self) -> Option<&dyn Hatchable> {
        None
    }
    /// Mutably probes for [`Hatchable`].
    fn as_hatchable_mut(&mut self) -> Option<&mut dyn Hatchable> {
        None
    }

    /// Probes for [`Levelled`].
    fn as_levelled(&self) -> Option<&dyn Levelled> {
        None
    }
    /// Mutably probes for [`Levelled`].
    fn as_levelled_mut(&mut self) -> Option<&mut dyn Levelled> {
        None
    }

    /// Probes for [`Lightable`].
    fn as_lightable(&self) -> Option<&dyn Lightable> {
        None
    }
    /// Mutably probes for [`Lightable`].
    fn as_lightable_mut(&mut self) -> Option<&mut dyn Lightable> {
        None
    }

    /// Probes for [`MultipleFacing`].
    fn as_multiple_facing(&self) -> Option<&dyn MultipleFacing> {
        None
    }
    /// Mutably probes for [`MultipleFacing`].
    fn as_multiple_facing_mut(&mut self) -> Option<&mut dyn MultipleFacing> {
        None
    }

    /// Probes for [`Openable`].
    fn as_openable(&self) -> Option<&dyn Openable> {
        None
    }
    /// Mutably probes for [`Openable`].
    fn as_openable_mut(&mut self) -> Option<&mut dyn Openable> {
        None
    }

    /// Probes for [`Orientable`].
    fn as_orientable(&self) -> Option<&dyn Orientable> {
        None
    }
    /// Mutably probes for [`Orientable`].
    fn as_orientable_mut(&mut self) -> Option<&mut dyn Orientable> {
        None
    }

    /// Probes for [`Powerable`].
    fn as_powerable(&self) -> Option<&dyn Powerable> {
        None
    }
    /// Mutably probes for [`Powerable`].
    fn as_powerable_mut(&mut self) -> Option<&mut dyn Powerable> {
        None
    }

    /// Probes for [`Rail`].
    fn as_rail(&self) -> Option<&dyn Rail> {
        None
    }
    /// Mutably probes for [`Rail`].
    fn as_rail_mut(&mut self) -> Option<&mut dyn Rail> {
        None
    }

    /// Probes for [`Rotatable`].
    fn as_rotatable(&self) -> Option<&dyn Rotatable> {
        None
    }
    /// Mutably probes for [`Rotatable`].
    fn as_rotatable_mut(&mut self) -> Option<&mut dyn Rotatable> {
        None
    }

    /// Probes for [`Snowable`].
    fn as_snowable(&self) -> Option<&dyn Snowable> {
        None
    }
    /// Mutably probes for [`Snowable`].
    fn as_snowable_mut(&mut self) -> Option<&mut dyn Snowable> {
        None
    }

    /// Probes for [`Waterlogged`].
    fn as_waterlogged(&self) -> Option<&dyn Waterlogged> {
        None
    }
    /// Mutably probes for [`Waterlogged`].
    fn as_waterlogged_mut(&mut self) -> Option<&mut dyn Waterlogged> {
        None
    }

    /// Probes for [`BedPart`].
    fn as_bed_part(&self) -> Option<&dyn BedPart> {
        None
    }
    /// Mutably probes for [`BedPart`].
    fn as_bed_part_mut(&mut self) -> Option<&mut dyn BedPart> {
        None
    }

    /// Probes for [`Chested`].
    fn as_chested(&self) -> Option<&dyn Chested> {
        None
    }
    /// Mutably probes for [`Chested`].
    fn as_chested_mut(&mut self) -> Option<&mut dyn Chested> {
        None
    }

    /// Probes for [`Hinged`].
    fn as_hinged(&self) -> Option<&dyn Hinged> {
        None
    }
    /// Mutably probes for [`Hinged`].
    fn as_hinged_mut(&mut self) -> Option<&mut dyn Hinged> {
        None
    }

    /// Probes for [`Slabbed`].
    fn as_slabbed(&self) -> Option<&dyn Slabbed> {
        None
    }
    /// Mutably probes for [`Slabbed`].
    fn as_slabbed_mut(&mut self) -> Option<&mut dyn Slabbed> {
        None
    }

    /// Probes for [`Staired`].
    fn as_staired(&self) -> Option<&dyn Staired> {
        None
    }
    /// Mutably probes for [`Staired`].
    fn as_staired_mut(&mut self) -> Option<&mut dyn Staired> {
        None
    }

    /// Probes for [`Comparator`].
    fn as_comparator(&self) -> Option<&dyn Comparator> {
        None
    }
    /// Mutably probes for [`Comparator`].
    fn as_comparator_mut(&mut self) -> Option<&mut dyn Comparator> {
        None
    }

    /// Probes for [`Candles`].
    fn as_candles(&self) -> Option<&dyn Candles> {
        None
    }
    /// Mutably probes for [`Candles`].
    fn as_candles_mut(&mut self) -> Option<&mut dyn Candles> {
        None
    }

    /// Probes for [`Pickled`].
    fn as_pickled(&self) -> Option<&dyn Pickled> {
        None
    }
    /// Mutably probes for [`Pickled`].
    fn as_pickled_mut(&mut self) -> Option<&mut dyn Pickled> {
        None
    }

    /// Probes for [`Layered`].
    fn as_layered(&self) -> Option<&dyn Layered> {
        None
    }
    /// Mutably probes for [`Layered`].
    fn as_layered_mut(&mut self) -> Option<&mut dyn Layered> {
        None
    }

    /// Probes for [`Moisturised`].
    fn as_moisturised(&self) -> Option<&dyn Moisturised> {
        None
    }
    /// Mutably probes for [`Moisturised`].
    fn as_moisturised_mut(&mut self) -> Option<&mut dyn Moisturised> {
        None
    }

    /// Probes for [`Delayed`].
    fn as_delayed(&self) -> Option<&dyn Delayed> {
        None
    }
    /// Mutably probes for [`Delayed`].
    fn as_delayed_mut(&mut self) -> Option<&mut dyn Delayed> {
        None
    }
}
