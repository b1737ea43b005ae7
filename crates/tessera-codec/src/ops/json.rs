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

//! The JSON tree format algebra, over [`serde_json::Value`].
//!
//! JSON has no distinct int/long/float/double node kinds, so extraction
//! honors the *declared numeric subtype* of the node instead: integer
//! extraction requires an integer-subtype number (and, for `get_int`, an
//! i32-range fit), float extraction requires a float-subtype number. This
//! keeps the round-trip law intact for each requested kind rather than
//! silently coercing any number to any width.
//!
//! The crate enables `serde_json`'s `preserve_order` feature, so object
//! entries keep their insertion order.

use serde_json::{Map, Number, Value};

use super::FormatOps;

/// Format algebra over the `serde_json` value tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOps;

/// Stringifies a map key node. String nodes pass through; anything else is
/// rendered as its JSON text, mirroring how dynamically-typed hosts coerce
/// object keys.
fn key_text(key: &Value) -> String {
    match key {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl FormatOps for JsonOps {
    type Value = Value;

    fn create_string(&self, value: &str) -> Value {
        Value::String(value.to_owned())
    }

    fn create_int(&self, value: i32) -> Value {
        Value::Number(Number::from(value))
    }

    fn create_long(&self, value: i64) -> Value {
        Value::Number(Number::from(value))
    }

    fn create_float(&self, value: f32) -> Value {
        // JSON cannot represent NaN/infinity; those construct null, whose
        // extraction then fails like any other wrong-kind value.
        Number::from_f64(f64::from(value))
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }

    fn create_double(&self, value: f64) -> Value {
        Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }

    fn create_bool(&self, value: bool) -> Value {
        Value::Bool(value)
    }

    fn create_list(&self, elements: Vec<Value>) -> Value {
        Value::Array(elements)
    }

    fn create_map(&self, entries: Vec<(Value, Value)>) -> Value {
        let mut object = Map::new();
        for (key, value) in entries {
            object.insert(key_text(&key), value);
        }
        Value::Object(object)
    }

    fn get_string(&self, input: &Value) -> Option<String> {
        input.as_str().map(str::to_owned)
    }

    fn get_int(&self, input: &Value) -> Option<i32> {
        match input {
            Value::Number(n) if !n.is_f64() => n.as_i64().and_then(|v| i32::try_from(v).ok()),
            _ => None,
        }
    }

    fn get_long(&self, input: &Value) -> Option<i64> {
        match input {
            Value::Number(n) if !n.is_f64() => n.as_i64(),
            _ => None,
        }
    }

    fn get_float(&self, input: &Value) -> Option<f32> {
        match input {
            Value::Number(n) if n.is_f64() => n.as_f64().map(|v| v as f32),
            _ => None,
        }
    }

    fn get_double(&self, input: &Value) -> Option<f64> {
        match input {
            Value::Number(n) if n.is_f64() => n.as_f64(),
            _ => None,
        }
    }

    fn get_bool(&self, input: &Value) -> Option<bool> {
        input.as_bool()
    }

    fn get_list(&self, input: &Value) -> Option<Vec<Value>> {
        input.as_array().cloned()
    }

    fn get_map(&self, input: &Value) -> Option<Vec<(Value, Value)>> {
        input.as_object().map(|object| {
            object
                .iter()
                .map(|(key, value)| (Value::String(key.clone()), value.clone()))
                .collect()
        })
    }

    fn empty(&self) -> Value {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primitives_round_trip() {
        let ops = JsonOps;
        assert_eq!(ops.get_int(&ops.create_int(i32::MAX)), Some(i32::MAX));
        assert_eq!(ops.get_long(&ops.create_long(1_i64 << 40)), Some(1_i64 << 40));
        assert_eq!(ops.get_float(&ops.create_float(2.5)), Some(2.5));
        assert_eq!(ops.get_double(&ops.create_double(-0.125)), Some(-0.125));
        assert_eq!(ops.get_bool(&ops.create_bool(false)), Some(false));
        assert_eq!(ops.get_string(&ops.create_string("s")).as_deref(), Some("s"));
    }

    #[test]
    fn numeric_extraction_honors_the_declared_subtype() {
        let ops = JsonOps;
        assert_eq!(
            ops.get_int(&json!(1.5)),
            None,
            "a float-subtype number is not an int"
        );
        assert_eq!(ops.get_float(&json!(3)), None, "an integer-subtype number is not a float");
        assert_eq!(
            ops.get_int(&json!(i64::from(i32::MAX) + 1)),
            None,
            "out-of-range integers must not wrap"
        );
        assert_eq!(ops.get_long(&json!(i64::from(i32::MAX) + 1)), Some(i64::from(i32::MAX) + 1));
    }

    #[test]
    fn containers_map_to_arrays_and_objects() {
        let ops = JsonOps;
        let list = ops.create_list(vec![ops.create_int(1), ops.create_int(2)]);
        assert_eq!(list, json!([1, 2]));

        let map = ops.create_map(vec![
            (ops.create_string("b"), ops.create_int(2)),
            (ops.create_string("a"), ops.create_int(1)),
        ]);
        let entries = ops.get_map(&map).expect("object should read back");
        assert_eq!(
            ops.get_string(&entries[0].0).as_deref(),
            Some("b"),
            "preserve_order must keep insertion order"
        );
    }

    #[test]
    fn non_string_keys_are_coerced_to_text() {
        let ops = JsonOps;
        let map = ops.create_map(vec![(ops.create_int(7), ops.create_bool(true))]);
        assert_eq!(map, json!({ "7": true }));
    }

    #[test]
    fn empty_is_null_and_extracts_as_nothing() {
        let ops = JsonOps;
        assert_eq!(ops.empty(), Value::Null);
        assert_eq!(ops.get_string(&Value::Null), None);
        assert_eq!(ops.get_list(&Value::Null), None);
    }
}
