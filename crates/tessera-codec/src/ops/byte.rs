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

//! The length-prefixed binary format algebra.
//!
//! Fixed-size primitives use their big-endian two's complement / IEEE-754
//! encodings. Variable-length data (strings, lists, maps) is prefixed with a
//! 4-byte big-endian length or count:
//!
//! ```text
//! string: [len u32][UTF-8 bytes]
//! list:   [count u32] then per element [len u32][bytes]
//! map:    [count u32] then per entry [key len u32][key][val len u32][val]
//! ```
//!
//! Extraction validates exact byte lengths where a fixed width is expected
//! and returns `None` on any malformed input; it never panics.

use super::FormatOps;

/// Format algebra over raw byte buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteOps;

/// Wraps a payload with its 4-byte big-endian length header.
fn with_length_prefix(out: &mut Vec<u8>, data: &[u8]) {
    out.extend_from_slice(&len_u32(data.len()).to_be_bytes());
    out.extend_from_slice(data);
}

fn len_u32(len: usize) -> u32 {
    // The wire format caps each unit at u32::MAX bytes; anything larger
    // cannot be represented and must fail here rather than corrupt output.
    u32::try_from(len).expect("payload exceeds the u32 length prefix of the binary format")
}

/// Reads a big-endian u32 at `at`, returning the value and the new cursor.
fn read_u32(buf: &[u8], at: usize) -> Option<(u32, usize)> {
    let end = at.checked_add(4)?;
    let bytes: [u8; 4] = buf.get(at..end)?.try_into().ok()?;
    Some((u32::from_be_bytes(bytes), end))
}

/// Reads one length-prefixed chunk at `at`, returning the payload slice and
/// the new cursor.
fn read_chunk(buf: &[u8], at: usize) -> Option<(&[u8], usize)> {
    let (len, at) = read_u32(buf, at)?;
    let end = at.checked_add(len as usize)?;
    Some((buf.get(at..end)?, end))
}

impl FormatOps for ByteOps {
    type Value = Vec<u8>;

    fn create_string(&self, value: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + value.len());
        with_length_prefix(&mut out, value.as_bytes());
        out
    }

    fn create_int(&self, value: i32) -> Vec<u8> {
        value.to_be_bytes().to_vec()
    }

    fn create_long(&self, value: i64) -> Vec<u8> {
        value.to_be_bytes().to_vec()
    }

    fn create_float(&self, value: f32) -> Vec<u8> {
        value.to_be_bytes().to_vec()
    }

    fn create_double(&self, value: f64) -> Vec<u8> {
        value.to_be_bytes().to_vec()
    }

    fn create_bool(&self, value: bool) -> Vec<u8> {
        vec![u8::from(value)]
    }

    fn create_list(&self, elements: Vec<Vec<u8>>) -> Vec<u8> {
        let total: usize = 4 + elements.iter().map(|e| 4 + e.len()).sum::<usize>();
        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(&len_u32(elements.len()).to_be_bytes());
        for elem in &elements {
            with_length_prefix(&mut out, elem);
        }
        out
    }

    fn create_map(&self, entries: Vec<(Vec<u8>, Vec<u8>)>) -> Vec<u8> {
        let total: usize = 4 + entries.iter().map(|(k, v)| 8 + k.len() + v.len()).sum::<usize>();
        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(&len_u32(entries.len()).to_be_bytes());
        for (key, value) in &entries {
            with_length_prefix(&mut out, key);
            with_length_prefix(&mut out, value);
        }
        out
    }

    fn get_string(&self, input: &Vec<u8>) -> Option<String> {
        let (payload, end) = read_chunk(input, 0)?;
        if end != input.len() {
            return None;
        }
        String::from_utf8(payload.to_vec()).ok()
    }

    fn get_int(&self, input: &Vec<u8>) -> Option<i32> {
        let bytes: [u8; 4] = input.as_slice().try_into().ok()?;
        Some(i32::from_be_bytes(bytes))
    }

    fn get_long(&self, input: &Vec<u8>) -> Option<i64> {
        let bytes: [u8; 8] = input.as_slice().try_into().ok()?;
        Some(i64::from_be_bytes(bytes))
    }

    fn get_float(&self, input: &Vec<u8>) -> Option<f32> {
        let bytes: [u8; 4] = input.as_slice().try_into().ok()?;
        Some(f32::from_be_bytes(bytes))
    }

    fn get_double(&self, input: &Vec<u8>) -> Option<f64> {
        let bytes: [u8; 8] = input.as_slice().try_into().ok()?;
        Some(f64::from_be_bytes(bytes))
    }

    fn get_bool(&self, input: &Vec<u8>) -> Option<bool> {
        match input.as_slice() {
            [b] => Some(*b != 0),
            _ => None,
        }
    }

    fn get_list(&self, input: &Vec<u8>) -> Option<Vec<Vec<u8>>> {
        let (count, mut at) = read_u32(input, 0)?;
        // No preallocation from the untrusted count: a hostile prefix must
        // fail on the bounds check, not on an allocation.
        let mut elements = Vec::new();
        for _ in 0..count {
            let (payload, next) = read_chunk(input, at)?;
            elements.push(payload.to_vec());
            at = next;
        }
        if at != input.len() {
            return None;
        }
        Some(elements)
    }

    fn get_map(&self, input: &Vec<u8>) -> Option<Vec<(Vec<u8>, Vec<u8>)>> {
        let (count, mut at) = read_u32(input, 0)?;
        let mut entries = Vec::new();
        for _ in 0..count {
            let (key, next) = read_chunk(input, at)?;
            let (value, next) = read_chunk(input, next)?;
            entries.push((key.to_vec(), value.to_vec()));
            at = next;
        }
        if at != input.len() {
            return None;
        }
        Some(entries)
    }

    fn empty(&self) -> Vec<u8> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_round_trip() {
        let ops = ByteOps;
        for value in [0, -1, 1, i32::MIN, i32::MAX] {
            assert_eq!(
                ops.get_int(&ops.create_int(value)),
                Some(value),
                "i32 {value} should round-trip"
            );
        }
        for value in [0i64, -1, i64::MIN, i64::MAX] {
            assert_eq!(ops.get_long(&ops.create_long(value)), Some(value));
        }
        assert_eq!(ops.get_float(&ops.create_float(1.5)), Some(1.5));
        assert_eq!(ops.get_double(&ops.create_double(-2.25)), Some(-2.25));
        assert_eq!(ops.get_bool(&ops.create_bool(true)), Some(true));
        assert_eq!(ops.get_bool(&ops.create_bool(false)), Some(false));
    }

    #[test]
    fn strings_round_trip_including_boundaries() {
        let ops = ByteOps;
        for value in ["", "hello", "a \"quoted\" back\\slash", "héllo ☃"] {
            assert_eq!(
                ops.get_string(&ops.create_string(value)).as_deref(),
                Some(value)
            );
        }
    }

    #[test]
    fn fixed_width_extraction_rejects_wrong_lengths() {
        let ops = ByteOps;
        assert_eq!(ops.get_int(&vec![0, 0, 0]), None, "3 bytes is not an i32");
        assert_eq!(ops.get_int(&vec![0; 5]), None, "5 bytes is not an i32");
        assert_eq!(ops.get_long(&vec![0; 4]), None);
        assert_eq!(ops.get_bool(&vec![]), None);
        assert_eq!(ops.get_bool(&vec![1, 0]), None);
    }

    #[test]
    fn malformed_containers_extract_as_none() {
        let ops = ByteOps;
        // Truncated count.
        assert_eq!(ops.get_list(&vec![0, 0]), None);
        // Count promises one element but the payload is missing.
        assert_eq!(ops.get_list(&vec![0, 0, 0, 1]), None);
        // Element length overruns the buffer.
        assert_eq!(ops.get_list(&vec![0, 0, 0, 1, 0, 0, 0, 9, 1]), None);
        // Trailing garbage after the declared entries.
        let mut list = ops.create_list(vec![ops.create_int(1)]);
        list.push(0xFF);
        assert_eq!(ops.get_list(&list), None);
    }

    #[test]
    fn lists_and_maps_preserve_order() {
        let ops = ByteOps;
        let list = ops.create_list(vec![
            ops.create_int(1),
            ops.create_int(-2),
            ops.create_int(3),
        ]);
        let elements = ops.get_list(&list).expect("list should parse");
        assert_eq!(elements.len(), 3);
        assert_eq!(ops.get_int(&elements[1]), Some(-2));

        let map = ops.create_map(vec![
            (ops.create_string("b"), ops.create_int(2)),
            (ops.create_string("a"), ops.create_int(1)),
        ]);
        let entries = ops.get_map(&map).expect("map should parse");
        assert_eq!(ops.get_string(&entries[0].0).as_deref(), Some("b"));
        assert_eq!(ops.get_string(&entries[1].0).as_deref(), Some("a"));
    }

    #[test]
    fn empty_is_a_zero_length_buffer() {
        let ops = ByteOps;
        assert!(ops.empty().is_empty());
        assert_eq!(ops.get_int(&ops.empty()), None);
    }
}
