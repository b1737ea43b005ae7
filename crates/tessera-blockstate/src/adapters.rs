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

//! The shipped capability adapters, one per capability trait.
//!
//! Three families cover almost everything: boolean flags, bounded integers
//! (which silently refuse out-of-range values on load), and constant sets
//! (optionally restricted to the state's allowed subset). The one genuinely
//! structural property, the face set of [`MultipleFacing`], gets a
//! hand-written adapter carrying a name-to-flag map.

use std::collections::BTreeMap;

use tessera_codec::{
    enum_of, map_of, BoolCodec, Codec, CodecError, EnumValue, FormatOps, IntCodec,
};

use crate::adapter::{AdapterRegistry, CapabilityAdapter};
use crate::capability::MultipleFacing;
use crate::enums::{
    AttachFace, Axis, BedHalf, ChestSide, ComparatorMode, Direction, Half, Hinge, RailShape,
    SlabKind, StairShape,
};
use crate::state::BlockState;

macro_rules! bool_adapter {
    ($(#[$meta:meta])* $name:ident, $key:literal, $as_ref:ident, $as_mut:ident, $get:ident, $set:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl<F: FormatOps> CapabilityAdapter<F> for $name {
            fn key(&self) -> &'static str {
                $key
            }

            fn save(
                &self,
                ops: &F,
                state: &dyn BlockState,
            ) -> Result<Option<F::Value>, CodecError> {
                match state.$as_ref() {
                    Some(cap) => BoolCodec.encode(ops, &cap.$get()).map(Some),
                    None => Ok(None),
                }
            }

            fn load(
                &self,
                ops: &F,
                state: &mut dyn BlockState,
                input: &F::Value,
            ) -> Result<(), CodecError> {
                if let Some(cap) = state.$as_mut() {
                    cap.$set(BoolCodec.decode(ops, input)?);
                }
                Ok(())
            }
        }
    };
}

macro_rules! ranged_int_adapter {
    ($(#[$meta:meta])* $name:ident, $key:literal, $as_ref:ident, $as_mut:ident, $get:ident, $set:ident, $cap:ident => $min:expr, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl<F: FormatOps> CapabilityAdapter<F> for $name {
            fn key(&self) -> &'static str {
                $key
            }

            fn save(
                &self,
                ops: &F,
                state: &dyn BlockState,
            ) -> Result<Option<F::Value>, CodecError> {
                match state.$as_ref() {
                    Some($cap) => IntCodec.encode(ops, &$cap.$get()).map(Some),
                    None => Ok(None),
                }
            }

            fn load(
                &self,
                ops: &F,
                state: &mut dyn BlockState,
                input: &F::Value,
            ) -> Result<(), CodecError> {
                if let Some($cap) = state.$as_mut() {
                    let value = IntCodec.decode(ops, input)?;
                    // Out-of-range values are well-formed, so they are
                    // skipped, not errors.
                    if ($min..=$max).contains(&value) {
                        $cap.$set(value);
                    }
                }
                Ok(())
            }
        }
    };
}

macro_rules! enum_adapter {
    ($(#[$meta:meta])* $name:ident, $key:literal, $enum:ty, $as_ref:ident, $as_mut:ident, $get:ident, $set:ident) => {
        enum_adapter!(
            $(#[$meta])* $name, $key, $enum, $as_ref, $as_mut, $get, $set,
            cap, value => true
        );
    };
    ($(#[$meta:meta])* $name:ident, $key:literal, $enum:ty, $as_ref:ident, $as_mut:ident, $get:ident, $set:ident, $cap:ident, $value:ident => $allowed:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl<F: FormatOps> CapabilityAdapter<F> for $name {
            fn key(&self) -> &'static str {
                $key
            }

            fn save(
                &self,
                ops: &F,
                state: &dyn BlockState,
            ) -> Result<Option<F::Value>, CodecError> {
                match state.$as_ref() {
                    Some($cap) => enum_of::<$enum>().encode(ops, &$cap.$get()).map(Some),
                    None => Ok(None),
                }
            }

            fn load(
                &self,
                ops: &F,
                state: &mut dyn BlockState,
                input: &F::Value,
            ) -> Result<(), CodecError> {
                if let Some($cap) = state.$as_mut() {
                    let $value = enum_of::<$enum>().decode(ops, input)?;
                    let value_allowed = $allowed;
                    if value_allowed {
                        $cap.$set($value);
                    }
                }
                Ok(())
            }
        }
    };
}

ranged_int_adapter!(
    /// Carries [`Ageable`](crate::capability::Ageable) as `age`.
    AgeAdapter, "age", as_ageable, as_ageable_mut, age, set_age,
    cap => 0, cap.max_age()
);
ranged_int_adapter!(
    /// Carries [`AnaloguePowerable`](crate::capability::AnaloguePowerable) as `power`.
    PowerAdapter, "power", as_analogue_powerable, as_analogue_powerable_mut, power, set_power,
    cap => 0, cap.max_power()
);
bool_adapter!(
    /// Carries [`Attachable`](crate::capability::Attachable) as `attached`.
    AttachedAdapter, "attached", as_attachable, as_attachable_mut, attached, set_attached
);
enum_adapter!(
    /// Carries [`Bisected`](crate::capability::Bisected) as `half`.
    HalfAdapter, "half", Half, as_bisected, as_bisected_mut, half, set_half
);
enum_adapter!(
    /// Carries [`Directional`](crate::capability::Directional) as `facing`.
    FacingAdapter, "facing", Direction, as_directional, as_directional_mut, facing, set_facing,
    cap, value => cap.allowed_faces().contains(&value)
);
enum_adapter!(
    /// Carries [`FaceAttachable`](crate::capability::FaceAttachable) as `attach_face`.
    AttachFaceAdapter, "attach_face", AttachFace, as_face_attachable, as_face_attachable_mut,
    attach_face, set_attach_face
);
bool_adapter!(
    /// Carries [`Hangable`](crate::capability::Hangable) as `hanging`.
    HangingAdapter, "hanging", as_hangable, as_hangable_mut, hanging, set_hanging
);
ranged_int_adapter!(
    /// Carries [`Hatchable`](crate::capability::Hatchable) as `hatch`.
    HatchAdapter, "hatch", as_hatchable, as_hatchable_mut, hatch, set_hatch,
    cap => 0, cap.max_hatch()
);
ranged_int_adapter!(
    /// Carries [`Levelled`](crate::capability::Levelled) as `level`.
    LevelAdapter, "level", as_levelled, as_levelled_mut, level, set_level,
    cap => 0, cap.max_level()
);
bool_adapter!(
    /// Carries [`Lightable`](crate::capability::Lightable) as `lit`.
    LitAdapter, "lit", as_lightable, as_lightable_mut, lit, set_lit
);
bool_adapter!(
    /// Carries [`Openable`](crate::capability::Openable) as `open`.
    OpenAdapter, "open", as_openable, as_openable_mut, open, set_open
);
enum_adapter!(
    /// Carries [`Orientable`](crate::capability::Orientable) as `axis`.
    AxisAdapter, "axis", Axis, as_orientable, as_orientable_mut, axis, set_axis,
    cap, value => cap.allowed_axes().contains(&value)
);
bool_adapter!(
    /// Carries [`Powerable`](crate::capability::Powerable) as `powered`.
    PoweredAdapter, "powered", as_powerable, as_powerable_mut, powered, set_powered
);
enum_adapter!(
    /// Carries [`Rail`](crate::capability::Rail) as `rail_shape`.
    RailShapeAdapter, "rail_shape", RailShape, as_rail, as_rail_mut, shape, set_shape,
    cap, value => cap.allowed_shapes().contains(&value)
);
enum_adapter!(
    /// Carries [`Rotatable`](crate::capability::Rotatable) as `rotation`.
    RotationAdapter, "rotation", Direction, as_rotatable, as_rotatable_mut, rotation, set_rotation
);
bool_adapter!(
    /// Carries [`Snowable`](crate::capability::Snowable) as `snowy`.
    SnowyAdapter, "snowy", as_snowable, as_snowable_mut, snowy, set_snowy
);
bool_adapter!(
    /// Carries [`Waterlogged`](crate::capability::Waterlogged) as `waterlogged`.
    WaterloggedAdapter, "waterlogged", as_waterlogged, as_waterlogged_mut, waterlogged,
    set_waterlogged
);
enum_adapter!(
    /// Carries [`BedPart`](crate::capability::BedPart) as `bed_part`.
    BedPartAdapter, "bed_part", BedHalf, as_bed_part, as_bed_part_mut, part, set_part
);
enum_adapter!(
    /// Carries [`Chested`](crate::capability::Chested) as `chest_type`.
    ChestSideAdapter, "chest_type", ChestSide, as_chested, as_chested_mut, chest_side,
    set_chest_side
);
enum_adapter!(
    /// Carries [`Hinged`](crate::capability::Hinged) as `hinge`.
    HingeAdapter, "hinge", Hinge, as_hinged, as_hinged_mut, hinge, set_hinge
);
enum_adapter!(
    /// Carries [`Slabbed`](crate::capability::Slabbed) as `slab_type`.
    SlabKindAdapter, "slab_type", SlabKind, as_slabbed, as_slabbed_mut, slab_kind, set_slab_kind
);
enum_adapter!(
    /// Carries [`Staired`](crate::capability::Staired) as `stair_shape`.
    StairShapeAdapter, "stair_shape", StairShape, as_staired, as_staired_mut, stair_shape,
    set_stair_shape
);
enum_adapter!(
    /// Carries [`Comparator`](crate::capability::Comparator) as `comparator_mode`.
    ComparatorModeAdapter, "comparator_mode", ComparatorMode, as_comparator, as_comparator_mut,
    mode, set_mode
);
ranged_int_adapter!(
    /// Carries [`Candles`](crate::capability::Candles) as `candles`.
    CandlesAdapter, "candles", as_candles, as_candles_mut, candles, set_candles,
    cap => 1, cap.max_candles()
);
ranged_int_adapter!(
    /// Carries [`Pickled`](crate::capability::Pickled) as `pickles`.
    PicklesAdapter, "pickles", as_pickled, as_pickled_mut, pickles, set_pickles,
    cap => 1, cap.max_pickles()
);
ranged_int_adapter!(
    /// Carries [`Layered`](crate::capability::Layered) as `layers`.
    LayersAdapter, "layers", as_layered, as_layered_mut, layers, set_layers,
    cap => 1, cap.max_layers()
);
ranged_int_adapter!(
    /// Carries [`Moisturised`](crate::capability::Moisturised) as `moisture`.
    MoistureAdapter, "moisture", as_moisturised, as_moisturised_mut, moisture, set_moisture,
    cap => 0, cap.max_moisture()
);
ranged_int_adapter!(
    /// Carries [`Delayed`](crate::capability::Delayed) as `delay`.
    DelayAdapter, "delay", as_delayed, as_delayed_mut, delay, set_delay,
    cap => cap.min_delay(), cap.max_delay()
);

/// Carries [`MultipleFacing`] as `faces`: a map from face name to presence.
///
/// Only the state's allowed faces are written; on load, faces outside the
/// allowed set are skipped and the rest still apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacesAdapter;

impl<F: FormatOps> CapabilityAdapter<F> for FacesAdapter {
    fn key(&self) -> &'static str {
        "faces"
    }

    fn save(&self, ops: &F, state: &dyn BlockState) -> Result<Option<F::Value>, CodecError> {
        let Some(cap) = state.as_multiple_facing() else {
            return Ok(None);
        };
        let entries = cap
            .allowed_faces()
            .iter()
            .map(|face| {
                (
                    ops.create_string(face.name()),
                    ops.create_bool(cap.has_face(*face)),
                )
            })
            .collect();
        Ok(Some(ops.create_map(entries)))
    }

    fn load(
        &self,
        ops: &F,
        state: &mut dyn BlockState,
        input: &F::Value,
    ) -> Result<(), CodecError> {
        if let Some(cap) = state.as_multiple_facing_mut() {
            let faces: BTreeMap<Direction, bool> =
                map_of(enum_of::<Direction>(), BoolCodec).decode(ops, input)?;
            for (face, present) in faces {
                if cap.allowed_faces().contains(&face) {
                    cap.set_face(face, present);
                }
            }
        }
        Ok(())
    }
}

impl<F: FormatOps> AdapterRegistry<F> {
    /// A registry preloaded with every adapter in this module.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(AgeAdapter);
        registry.register(PowerAdapter);
        registry.register(AttachedAdapter);
        registry.register(HalfAdapter);
        registry.register(FacingAdapter);
        registry.register(AttachFaceAdapter);
        registry.register(HangingAdapter);
        registry.register(HatchAdapter);
        registry.register(LevelAdapter);
        registry.register(LitAdapter);
        registry.register(FacesAdapter);
        registry.register(OpenAdapter);
        registry.register(AxisAdapter);
        registry.register(PoweredAdapter);
        registry.register(RailShapeAdapter);
        registry.register(RotationAdapter);
        registry.register(SnowyAdapter);
        registry.register(WaterloggedAdapter);
        registry.register(BedPartAdapter);
        registry.register(ChestSideAdapter);
        registry.register(HingeAdapter);
        registry.register(SlabKindAdapter);
        registry.register(StairShapeAdapter);
        registry.register(ComparatorModeAdapter);
        registry.register(CandlesAdapter);
        registry.register(PicklesAdapter);
        registry.register(LayersAdapter);
        registry.register(MoistureAdapter);
        registry.register(DelayAdapter);
        registry
    }
}
