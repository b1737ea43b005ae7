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

//! Cross-format codec tests: every assertion here is written once against
//! the algebra and executed against each shipped format.

use std::collections::BTreeMap;

use uuid::Uuid;

use super::*;
use crate::ops::{ByteOps, JsonOps, TagOps, TextOps, TreeOps};
use crate::tessera_enum;

tessera_enum! {
    /// Test-only constant set.
    pub enum Compass {
        North => "NORTH",
        South => "SOUTH",
        East => "EAST",
        West => "WEST",
    }
}

fn assert_primitives_round_trip<F: FormatOps>(ops: &F, format: &str) {
    for value in [0, 1, -1, i32::MIN, i32::MAX] {
        assert_eq!(
            IntCodec.decode(ops, &IntCodec.encode(ops, &value).unwrap()),
            Ok(value),
            "i32 {value} should round-trip through {format}"
        );
    }
    for value in [0i64, -1, i64::MIN, i64::MAX] {
        assert_eq!(
            LongCodec.decode(ops, &LongCodec.encode(ops, &value).unwrap()),
            Ok(value),
            "i64 {value} should round-trip through {format}"
        );
    }
    assert_eq!(
        FloatCodec.decode(ops, &FloatCodec.encode(ops, &1.5f32).unwrap()),
        Ok(1.5),
        "f32 should round-trip through {format}"
    );
    assert_eq!(
        DoubleCodec.decode(ops, &DoubleCodec.encode(ops, &-0.125f64).unwrap()),
        Ok(-0.125),
        "f64 should round-trip through {format}"
    );
    for value in [true, false] {
        assert_eq!(
            BoolCodec.decode(ops, &BoolCodec.encode(ops, &value).unwrap()),
            Ok(value),
            "bool {value} should round-trip through {format}"
        );
    }
    for value in ["", "hello", "with \"quotes\" and \\slashes", "héllo ☃"] {
        let owned = value.to_owned();
        assert_eq!(
            StringCodec.decode(ops, &StringCodec.encode(ops, &owned).unwrap()),
            Ok(owned.clone()),
            "string {value:?} should round-trip through {format}"
        );
    }
}

#[test]
fn primitives_round_trip_through_every_format() {
    assert_primitives_round_trip(&ByteOps, "ByteOps");
    assert_primitives_round_trip(&TagOps, "TagOps");
    assert_primitives_round_trip(&JsonOps, "JsonOps");
    assert_primitives_round_trip(&TextOps, "TextOps");
    assert_primitives_round_trip(&TreeOps, "TreeOps");
}

fn assert_int_list_round_trips<F: FormatOps>(ops: &F, format: &str) {
    let codec = IntCodec.list_of();
    let values = vec![1, -2, 3];
    let encoded = codec.encode(ops, &values).unwrap();
    assert_eq!(
        codec.decode(ops, &encoded),
        Ok(values),
        "list of ints should round-trip in order through {format}"
    );
    assert_eq!(
        codec.decode(ops, &codec.encode(ops, &Vec::new()).unwrap()),
        Ok(Vec::new()),
        "the empty list should round-trip through {format}"
    );
}

#[test]
fn lists_round_trip_through_every_format() {
    assert_int_list_round_trips(&ByteOps, "ByteOps");
    assert_int_list_round_trips(&TagOps, "TagOps");
    assert_int_list_round_trips(&JsonOps, "JsonOps");
    assert_int_list_round_trips(&TextOps, "TextOps");
    assert_int_list_round_trips(&TreeOps, "TreeOps");
}

fn assert_map_equality_ignores_entry_order<F: FormatOps>(ops: &F, format: &str) {
    let codec = map_of(StringCodec, IntCodec);
    let forward = ops.create_map(vec![
        (ops.create_string("a"), encoded_int(ops, 1)),
        (ops.create_string("b"), encoded_int(ops, 2)),
    ]);
    let reversed = ops.create_map(vec![
        (ops.create_string("b"), encoded_int(ops, 2)),
        (ops.create_string("a"), encoded_int(ops, 1)),
    ]);
    assert_eq!(
        codec.decode(ops, &forward),
        codec.decode(ops, &reversed),
        "decoded maps must compare equal regardless of entry order in {format}"
    );

    let mut logical = BTreeMap::new();
    logical.insert("a".to_owned(), 1);
    logical.insert("b".to_owned(), 2);
    assert_eq!(
        codec.decode(ops, &codec.encode(ops, &logical).unwrap()),
        Ok(logical),
        "map should round-trip through {format}"
    );
}

fn encoded_int<F: FormatOps>(ops: &F, value: i32) -> F::Value {
    ops.create_int(value)
}

#[test]
fn maps_round_trip_and_ignore_entry_order() {
    assert_map_equality_ignores_entry_order(&ByteOps, "ByteOps");
    assert_map_equality_ignores_entry_order(&TagOps, "TagOps");
    assert_map_equality_ignores_entry_order(&JsonOps, "JsonOps");
    assert_map_equality_ignores_entry_order(&TextOps, "TextOps");
    assert_map_equality_ignores_entry_order(&TreeOps, "TreeOps");
}

#[test]
fn enums_serialize_by_name() {
    let ops = JsonOps;
    let codec = enum_of::<Compass>();
    for direction in Compass::VARIANTS {
        let encoded = codec.encode(&ops, direction).unwrap();
        assert_eq!(
            codec.decode(&ops, &encoded),
            Ok(*direction),
            "constant {} should round-trip",
            direction.name()
        );
    }
    assert_eq!(
        codec.encode(&ops, &Compass::North).unwrap(),
        serde_json::json!("NORTH")
    );
}

#[test]
fn unknown_enum_names_report_the_offending_name() {
    let ops = TextOps;
    let codec = enum_of::<Compass>();
    let err = codec
        .decode(&ops, &ops.create_string("NOT_A_VALUE"))
        .expect_err("an unknown constant must not decode");
    assert!(
        err.message().contains("NOT_A_VALUE"),
        "error should name the unknown constant, got: {err}"
    );
}

#[test]
fn or_else_substitutes_its_fallback_on_failure() {
    let ops = JsonOps;
    let codec = IntCodec.or_else(7);
    assert_eq!(
        codec.decode(&ops, &serde_json::json!("not a number")),
        Ok(7),
        "a failed decode should yield the fallback"
    );
    assert_eq!(
        codec.decode(&ops, &serde_json::json!(3)),
        Ok(3),
        "a successful decode must not be replaced"
    );
}

#[test]
fn optional_maps_none_to_the_empty_value() {
    let ops = TagOps;
    let codec = IntCodec.optional();
    let absent = codec.encode(&ops, &None).unwrap();
    assert_eq!(absent, ops.empty());
    assert_eq!(codec.decode(&ops, &absent), Ok(None));
    let present = codec.encode(&ops, &Some(9)).unwrap();
    assert_eq!(codec.decode(&ops, &present), Ok(Some(9)));
}

#[test]
fn xmap_converts_both_directions() {
    let ops = TextOps;
    let celsius_as_tenths = IntCodec.xmap(|tenths: &i32| f64::from(*tenths) / 10.0, |c: &f64| (c * 10.0) as i32);
    let encoded = celsius_as_tenths.encode(&ops, &21.5).unwrap();
    assert_eq!(encoded, "215");
    assert_eq!(celsius_as_tenths.decode(&ops, &encoded), Ok(21.5));
}

#[test]
fn fallback_retries_the_secondary_codec() {
    let ops = JsonOps;
    let widened = IntCodec.xmap(|narrow: &i32| i64::from(*narrow), |wide: &i64| *wide as i32);
    let codec = fallback(LongCodec, widened);
    // An integer-subtype node wide enough only for long decodes via the
    // primary; an int-encoded node from an older writer goes through the
    // secondary.
    assert_eq!(codec.decode(&ops, &ops.create_long(1 << 40)), Ok(1 << 40));
    assert_eq!(codec.decode(&ops, &ops.create_int(5)), Ok(5));
    assert!(
        codec.decode(&ops, &serde_json::json!("nope")).is_err(),
        "when both alternatives fail the error must surface"
    );
}

#[test]
fn uuids_are_carried_as_canonical_text() {
    let ops = JsonOps;
    let id = Uuid::new_v4();
    let encoded = UuidCodec.encode(&ops, &id).unwrap();
    assert_eq!(encoded, serde_json::json!(id.to_string()));
    assert_eq!(UuidCodec.decode(&ops, &encoded), Ok(id));
    assert!(
        UuidCodec.decode(&ops, &serde_json::json!("not-a-uuid")).is_err(),
        "malformed UUID text must not decode"
    );
}

#[derive(Debug, Clone, PartialEq)]
struct PlotRecord {
    name: String,
    size: i32,
    owner: Option<String>,
    flags: Vec<bool>,
}

fn encode_plot<F: FormatOps>(ops: &F, plot: &PlotRecord) -> Result<F::Value, CodecError> {
    let record = RecordBuilder::new(ops)
        .field("name", &StringCodec, &plot.name)?
        .field("size", &IntCodec, &plot.size)?
        .optional_field("owner", &StringCodec, &plot.owner)?
        .field("flags", &BoolCodec.list_of(), &plot.flags)?;
    Ok(record.build())
}

fn decode_plot<F: FormatOps>(ops: &F, input: &F::Value) -> Result<PlotRecord, CodecError> {
    let view = RecordView::new(ops, input)?;
    Ok(PlotRecord {
        name: view.required("name", &StringCodec)?,
        size: view.required("size", &IntCodec)?,
        owner: view.optional("owner", &StringCodec.optional(), None),
        flags: view.optional("flags", &BoolCodec.list_of(), Vec::new()),
    })
}

fn assert_record_round_trips<F: FormatOps>(ops: &F, format: &str) {
    let plot = PlotRecord {
        name: "spawn".to_owned(),
        size: 64,
        owner: Some("aria".to_owned()),
        flags: vec![true, false],
    };
    let encoded = encode_plot(ops, &plot).unwrap();
    assert_eq!(
        decode_plot(ops, &encoded),
        Ok(plot),
        "record should round-trip through {format}"
    );

    let anonymous = PlotRecord {
        name: "wild".to_owned(),
        size: 8,
        owner: None,
        flags: Vec::new(),
    };
    let encoded = encode_plot(ops, &anonymous).unwrap();
    assert_eq!(
        decode_plot(ops, &encoded),
        Ok(anonymous),
        "absent optional fields should decode to their defaults in {format}"
    );
}

#[test]
fn records_round_trip_through_every_format() {
    assert_record_round_trips(&ByteOps, "ByteOps");
    assert_record_round_trips(&TagOps, "TagOps");
    assert_record_round_trips(&JsonOps, "JsonOps");
    assert_record_round_trips(&TextOps, "TextOps");
    assert_record_round_trips(&TreeOps, "TreeOps");
}

#[test]
fn records_report_missing_required_keys() {
    let ops = JsonOps;
    let err = decode_plot(&ops, &serde_json::json!({ "size": 3 }))
        .expect_err("a record without its name must not decode");
    assert!(
        err.message().contains("name"),
        "error should name the missing key, got: {err}"
    );

    let err = decode_plot(&ops, &serde_json::json!(17))
        .expect_err("a non-map value is not a record");
    assert!(err.message().contains("map"), "got: {err}");
}
