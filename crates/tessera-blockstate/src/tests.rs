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

//! Registry-level tests: whole states through the aggregate map, across
//! formats.

use serde_json::json;
use tessera_codec::{ByteOps, FormatOps, JsonOps, TagOps, TextOps, TreeOps};

use crate::adapter::AdapterRegistry;
use crate::capability::{
    Ageable, AnaloguePowerable, Attachable, BedPart, Bisected, Candles, Chested, Comparator,
    Delayed, Directional, FaceAttachable, Hangable, Hatchable, Hinged, Layered, Levelled,
    Lightable, Moisturised, MultipleFacing, Openable, Orientable, Pickled, Powerable, Rail,
    Rotatable, Slabbed, Snowable, Staired, Waterlogged,
};
use crate::enums::{
    AttachFace, Axis, BedHalf, ComparatorMode, Direction, Half, Hinge, RailShape, SlabKind,
    StairShape,
};
use crate::state::BlockState;
use crate::states::{
    CandleState, ChestState, CropState, DoorState, FurnaceState, PoweredRailState, RepeaterState,
    VineState,
};

fn assert_door_round_trips<F: FormatOps>(ops: &F, format: &str) {
    let registry = AdapterRegistry::<F>::with_defaults();
    let mut door = DoorState::new();
    door.set_half(Half::Top);
    door.set_facing(Direction::East);
    door.set_hinge(Hinge::Right);
    door.set_open(true);
    door.set_powered(true);

    let saved = registry.save(ops, &door).expect("door should serialize");
    let mut restored = DoorState::new();
    registry
        .load(ops, &mut restored, &saved)
        .expect("the saved map should load");
    assert_eq!(restored, door, "door state should round-trip through {format}");
}

#[test]
fn door_round_trips_through_every_format() {
    assert_door_round_trips(&ByteOps, "ByteOps");
    assert_door_round_trips(&TagOps, "TagOps");
    assert_door_round_trips(&JsonOps, "JsonOps");
    assert_door_round_trips(&TextOps, "TextOps");
    assert_door_round_trips(&TreeOps, "TreeOps");
}

#[test]
fn save_only_emits_the_capabilities_a_state_has() {
    let ops = JsonOps;
    let registry = AdapterRegistry::with_defaults();
    let mut crop = CropState::new();
    crop.set_age(5);

    let saved = registry.save(&ops, &crop).expect("crop should serialize");
    assert_eq!(
        saved,
        json!({ "age": 5 }),
        "a crop has exactly one serializable property"
    );
}

#[test]
fn unknown_keys_are_skipped_and_the_rest_still_apply() {
    let ops = JsonOps;
    let registry = AdapterRegistry::with_defaults();
    let mut furnace = FurnaceState::new();
    registry
        .load(
            &ops,
            &mut furnace,
            &json!({ "mystery": 1, "lit": true, "facing": "EAST" }),
        )
        .expect("unknown keys must not fail the load");
    assert!(furnace.lit(), "lit should have applied");
    assert_eq!(furnace.facing(), Direction::East, "facing should have applied");
}

#[test]
fn malformed_values_are_skipped_per_entry() {
    let ops = JsonOps;
    let registry = AdapterRegistry::with_defaults();
    let mut crop = CropState::new();
    crop.set_age(2);
    registry
        .load(&ops, &mut crop, &json!({ "age": "old" }))
        .expect("a malformed entry must not fail the load");
    assert_eq!(crop.age(), 2, "the malformed age must not have applied");
}

#[test]
fn loading_a_non_map_is_an_error() {
    let ops = JsonOps;
    let registry = AdapterRegistry::with_defaults();
    let mut crop = CropState::new();
    let err = registry
        .load(&ops, &mut crop, &json!(41))
        .expect_err("a number is not an aggregate map");
    assert!(err.message().contains("map"), "got: {err}");
}

#[test]
fn out_of_range_ages_are_ignored() {
    let ops = JsonOps;
    let registry = AdapterRegistry::with_defaults();
    let mut crop = CropState::new();
    registry
        .load(&ops, &mut crop, &json!({ "age": 99 }))
        .expect("an out-of-range value is well-formed");
    assert_eq!(crop.age(), 0, "an age past max_age must not apply");

    registry
        .load(&ops, &mut crop, &json!({ "age": 7 }))
        .expect("a maximal age is valid");
    assert_eq!(crop.age(), 7);
}

#[test]
fn facing_outside_the_allowed_set_is_ignored() {
    let ops = JsonOps;
    let registry = AdapterRegistry::with_defaults();
    let mut door = DoorState::new();
    registry
        .load(&ops, &mut door, &json!({ "facing": "UP" }))
        .expect("a door cannot face up, but the value is well-formed");
    assert_eq!(door.facing(), Direction::North, "doors only face horizontally");
}

#[test]
fn straight_only_rails_ignore_curved_shapes() {
    let ops = JsonOps;
    let registry = AdapterRegistry::with_defaults();
    let mut rail = PoweredRailState::new();
    registry
        .load(&ops, &mut rail, &json!({ "rail_shape": "NORTH_EAST" }))
        .expect("a curved shape is well-formed");
    assert_eq!(rail.shape(), RailShape::NorthSouth, "curves must not apply");

    registry
        .load(&ops, &mut rail, &json!({ "rail_shape": "ASCENDING_EAST" }))
        .expect("a straight ascending shape is valid");
    assert_eq!(rail.shape(), RailShape::AscendingEast);
}

#[test]
fn vine_faces_round_trip_and_respect_the_allowed_set() {
    let ops = JsonOps;
    let registry = AdapterRegistry::with_defaults();
    let mut vine = VineState::new();
    vine.set_face(Direction::North, true);
    vine.set_face(Direction::Up, true);

    let saved = registry.save(&ops, &vine).expect("vine should serialize");
    let mut restored = VineState::new();
    registry
        .load(&ops, &mut restored, &saved)
        .expect("the saved faces should load");
    assert_eq!(restored, vine);

    // A vine cannot cling to the floor.
    registry
        .load(&ops, &mut restored, &json!({ "faces": { "DOWN": true } }))
        .expect("a disallowed face is well-formed");
    assert_eq!(restored, vine, "the DOWN face must not apply");
}

#[test]
fn candle_counts_respect_the_lower_bound() {
    let ops = JsonOps;
    let registry = AdapterRegistry::with_defaults();
    let mut candle = CandleState::new();
    registry
        .load(&ops, &mut candle, &json!({ "candles": 0 }))
        .expect("zero candles is well-formed");
    assert_eq!(candle.candles(), 1, "a count below 1 must not apply");

    registry
        .load(&ops, &mut candle, &json!({ "candles": 3, "lit": true }))
        .expect("a valid cluster should load");
    assert_eq!(candle.candles(), 3);
    assert!(candle.lit());
}

#[test]
fn repeater_delay_respects_both_bounds() {
    let ops = JsonOps;
    let registry = AdapterRegistry::with_defaults();
    let mut repeater = RepeaterState::new();
    for (input, expected) in [(0, 1), (4, 4), (5, 4)] {
        registry
            .load(&ops, &mut repeater, &json!({ "delay": input }))
            .expect("delays are well-formed integers");
        assert_eq!(
            repeater.delay(),
            expected,
            "delay {input} should leave the state at {expected}"
        );
    }
}

#[test]
fn chest_round_trips_through_text() {
    let ops = TextOps;
    let registry = AdapterRegistry::with_defaults();
    let mut chest = ChestState::new();
    chest.set_facing(Direction::West);
    chest.set_chest_side(crate::enums::ChestSide::Left);
    chest.set_waterlogged(true);

    let saved = registry.save(&ops, &chest).expect("chest should serialize");
    let mut restored = ChestState::new();
    registry
        .load(&ops, &mut restored, &saved)
        .expect("the grammar string should load");
    assert_eq!(restored, chest);
}

/// Test-only state carrying every capability the shipped states do not.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OmniState {
    power: i32,
    attached: bool,
    attach_face: AttachFace,
    hanging: bool,
    hatch: i32,
    level: i32,
    axis: Axis,
    rotation: Direction,
    snowy: bool,
    part: BedHalf,
    slab: SlabKind,
    stair: StairShape,
    mode: ComparatorMode,
    pickles: i32,
    layers: i32,
    moisture: i32,
}

impl OmniState {
    fn new() -> Self {
        Self {
            power: 0,
            attached: false,
            attach_face: AttachFace::Floor,
            hanging: false,
            hatch: 0,
            level: 0,
            axis: Axis::Y,
            rotation: Direction::North,
            snowy: false,
            part: BedHalf::Foot,
            slab: SlabKind::Bottom,
            stair: StairShape::Straight,
            mode: ComparatorMode::Compare,
            pickles: 1,
            layers: 1,
            moisture: 0,
        }
    }
}

impl AnaloguePowerable for OmniState {
    fn power(&self) -> i32 {
        self.power
    }
    fn set_power(&mut self, power: i32) {
        self.power = power;
    }
}

impl Attachable for OmniState {
    fn attached(&self) -> bool {
        self.attached
    }
    fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }
}

impl FaceAttachable for OmniState {
    fn attach_face(&self) -> AttachFace {
        self.attach_face
    }
    fn set_attach_face(&mut self, face: AttachFace) {
        self.attach_face = face;
    }
}

impl Hangable for OmniState {
    fn hanging(&self) -> bool {
        self.hanging
    }
    fn set_hanging(&mut self, hanging: bool) {
        self.hanging = hanging;
    }
}

impl Hatchable for OmniState {
    fn hatch(&self) -> i32 {
        self.hatch
    }
    fn set_hatch(&mut self, hatch: i32) {
        self.hatch = hatch;
    }
    fn max_hatch(&self) -> i32 {
        2
    }
}

impl Levelled for OmniState {
    fn level(&self) -> i32 {
        self.level
    }
    fn set_level(&mut self, level: i32) {
        self.level = level;
    }
    fn max_level(&self) -> i32 {
        3
    }
}

impl Orientable for OmniState {
    fn axis(&self) -> Axis {
        self.axis
    }
    fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
    }
}

impl Rotatable for OmniState {
    fn rotation(&self) -> Direction {
        self.rotation
    }
    fn set_rotation(&mut self, rotation: Direction) {
        self.rotation = rotation;
    }
}

impl Snowable for OmniState {
    fn snowy(&self) -> bool {
        self.snowy
    }
    fn set_snowy(&mut self, snowy: bool) {
        self.snowy = snowy;
    }
}

impl BedPart for OmniState {
    fn part(&self) -> BedHalf {
        self.part
    }
    fn set_part(&mut self, part: BedHalf) {
        self.part = part;
    }
}

impl Slabbed for OmniState {
    fn slab_kind(&self) -> SlabKind {
        self.slab
    }
    fn set_slab_kind(&mut self, kind: SlabKind) {
        self.slab = kind;
    }
}

impl Staired for OmniState {
    fn stair_shape(&self) -> StairShape {
        self.stair
    }
    fn set_stair_shape(&mut self, shape: StairShape) {
        self.stair = shape;
    }
}

impl Comparator for OmniState {
    fn mode(&self) -> ComparatorMode {
        self.mode
    }
    fn set_mode(&mut self, mode: ComparatorMode) {
        self.mode = mode;
    }
}

impl Pickled for OmniState {
    fn pickles(&self) -> i32 {
        self.pickles
    }
    fn set_pickles(&mut self, pickles: i32) {
        self.pickles = pickles;
    }
    fn max_pickles(&self) -> i32 {
        4
    }
}

impl Layered for OmniState {
    fn layers(&self) -> i32 {
        self.layers
    }
    fn set_layers(&mut self, layers: i32) {
        self.layers = layers;
    }
    fn max_layers(&self) -> i32 {
        8
    }
}

impl Moisturised for OmniState {
    fn moisture(&self) -> i32 {
        self.moisture
    }
    fn set_moisture(&mut self, moisture: i32) {
        self.moisture = moisture;
    }
    fn max_moisture(&self) -> i32 {
        7
    }
}

impl BlockState for OmniState {
    fn block_id(&self) -> &str {
        "omni_test_block"
    }

    fn as_analogue_powerable(&self) -> Option<&dyn AnaloguePowerable> {
        Some(self)
    }
    fn as_analogue_powerable_mut(&mut self) -> Option<&mut dyn AnaloguePowerable> {
        Some(self)
    }
    fn as_attachable(&self) -> Option<&dyn Attachable> {
        Some(self)
    }
    fn as_attachable_mut(&mut self) -> Option<&mut dyn Attachable> {
        Some(self)
    }
    fn as_face_attachable(&self) -> Option<&dyn FaceAttachable> {
        Some(self)
    }
    fn as_face_attachable_mut(&mut self) -> Option<&mut dyn FaceAttachable> {
        Some(self)
    }
    fn as_hangable(&self) -> Option<&dyn Hangable> {
        Some(self)
    }
    fn as_hangable_mut(&mut self) -> Option<&mut dyn Hangable> {
        Some(self)
    }
    fn as_hatchable(&self) -> Option<&dyn Hatchable> {
        Some(self)
    }
    fn as_hatchable_mut(&mut self) -> Option<&mut dyn Hatchable> {
        Some(self)
    }
    fn as_levelled(&self) -> Option<&dyn Levelled> {
        Some(self)
    }
    fn as_levelled_mut(&mut self) -> Option<&mut dyn Levelled> {
        Some(self)
    }
    fn as_orientable(&self) -> Option<&dyn Orientable> {
        Some(self)
    }
    fn as_orientable_mut(&mut self) -> Option<&mut dyn Orientable> {
        Some(self)
    }
    fn as_rotatable(&self) -> Option<&dyn Rotatable> {
        Some(self)
    }
    fn as_rotatable_mut(&mut self) -> Option<&mut dyn Rotatable> {
        Some(self)
    }
    fn as_snowable(&self) -> Option<&dyn Snowable> {
        Some(self)
    }
    fn as_snowable_mut(&mut self) -> Option<&mut dyn Snowable> {
        Some(self)
    }
    fn as_bed_part(&self) -> Option<&dyn BedPart> {
        Some(self)
    }
    fn as_bed_part_mut(&mut self) -> Option<&mut dyn BedPart> {
        Some(self)
    }
    fn as_slabbed(&self) -> Option<&dyn Slabbed> {
        Some(self)
    }
    fn as_slabbed_mut(&mut self) -> Option<&mut dyn Slabbed> {
        Some(self)
    }
    fn as_staired(&self) -> Option<&dyn Staired> {
        Some(self)
    }
    fn as_staired_mut(&mut self) -> Option<&mut dyn Staired> {
        Some(self)
    }
    fn as_comparator(&self) -> Option<&dyn Comparator> {
        Some(self)
    }
    fn as_comparator_mut(&mut self) -> Option<&mut dyn Comparator> {
        Some(self)
    }
    fn as_pickled(&self) -> Option<&dyn Pickled> {
        Some(self)
    }
    fn as_pickled_mut(&mut self) -> Option<&mut dyn Pickled> {
        Some(self)
    }
    fn as_layered(&self) -> Option<&dyn Layered> {
        Some(self)
    }
    fn as_layered_mut(&mut self) -> Option<&mut dyn Layered> {
        Some(self)
    }
    fn as_moisturised(&self) -> Option<&dyn Moisturised> {
        Some(self)
    }
    fn as_moisturised_mut(&mut self) -> Option<&mut dyn Moisturised> {
        Some(self)
    }
}

fn assert_omni_round_trips<F: FormatOps>(ops: &F, format: &str) {
    let registry = AdapterRegistry::<F>::with_defaults();
    let mut omni = OmniState::new();
    omni.set_power(11);
    omni.set_attached(true);
    omni.set_attach_face(AttachFace::Ceiling);
    omni.set_hanging(true);
    omni.set_hatch(2);
    omni.set_level(3);
    omni.set_axis(Axis::Z);
    omni.set_rotation(Direction::Down);
    omni.set_snowy(true);
    omni.set_part(BedHalf::Head);
    omni.set_slab_kind(SlabKind::Double);
    omni.set_stair_shape(StairShape::OuterRight);
    omni.set_mode(ComparatorMode::Subtract);
    omni.set_pickles(4);
    omni.set_layers(6);
    omni.set_moisture(7);

    let saved = registry.save(ops, &omni).expect("omni state should serialize");
    let mut restored = OmniState::new();
    registry
        .load(ops, &mut restored, &saved)
        .expect("the saved map should load");
    assert_eq!(restored, omni, "every capability should round-trip through {format}");
}

#[test]
fn the_remaining_capabilities_round_trip() {
    assert_omni_round_trips(&JsonOps, "JsonOps");
    assert_omni_round_trips(&TextOps, "TextOps");
    assert_omni_round_trips(&TagOps, "TagOps");
}
