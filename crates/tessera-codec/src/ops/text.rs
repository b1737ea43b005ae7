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

//! The bracketed string grammar format algebra.
//!
//! A compact, human-authorable text format:
//!
//! ```text
//! string: "escaped text"      bool:  true / false
//! int:    42                  list:  [1,2,3]
//! long:   42L                 map:   {key:value,other:value}
//! float:  1.5f
//! double: 1.5d
//! ```
//!
//! Strings are double-quoted with `\"` and `\\` escapes. Splitting a list on
//! commas (and a map entry on its first colon) is bracket- and quote-aware:
//! `[` `{` deepen, `]` `}` shallow, an unescaped `"` toggles quoted mode, and
//! a separator only counts at depth 0 outside quotes. Numeric extraction
//! rejects quoted tokens and tokens carrying the wrong or no suffix.

use super::FormatOps;

/// Format algebra over grammar strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOps;

/// Splits `input` on top-level occurrences of `separator`.
///
/// Returns `None` when brackets are unbalanced or a quote is left open;
/// such input has no well-formed reading.
fn split_top_level(input: &str, separator: char) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut in_quotes = false;
    let mut escaped = false;
    let mut start = 0usize;
    for (at, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            '[' | '{' if !in_quotes => depth += 1,
            ']' | '}' if !in_quotes => depth = depth.checked_sub(1)?,
            c if c == separator && !in_quotes && depth == 0 => {
                parts.push(&input[start..at]);
                start = at + c.len_utf8();
            }
            _ => {}
        }
    }
    if in_quotes || depth != 0 {
        return None;
    }
    parts.push(&input[start..]);
    Some(parts)
}

/// Splits a map entry on its first top-level colon, or `None` if the entry
/// has no top-level colon.
fn split_entry(entry: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    let mut in_quotes = false;
    let mut escaped = false;
    for (at, c) in entry.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            '[' | '{' if !in_quotes => depth += 1,
            ']' | '}' if !in_quotes => depth = depth.checked_sub(1)?,
            ':' if !in_quotes && depth == 0 => {
                return Some((&entry[..at], &entry[at + 1..]));
            }
            _ => {}
        }
    }
    None
}

fn has_numeric_suffix(token: &str) -> bool {
    token.ends_with('L') || token.ends_with('f') || token.ends_with('d')
}

impl FormatOps for TextOps {
    type Value = String;

    fn create_string(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        out.push('"');
        for c in value.chars() {
            if c == '"' || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('"');
        out
    }

    fn create_int(&self, value: i32) -> String {
        value.to_string()
    }

    fn create_long(&self, value: i64) -> String {
        format!("{value}L")
    }

    fn create_float(&self, value: f32) -> String {
        format!("{value}f")
    }

    fn create_double(&self, value: f64) -> String {
        format!("{value}d")
    }

    fn create_bool(&self, value: bool) -> String {
        value.to_string()
    }

    fn create_list(&self, elements: Vec<String>) -> String {
        format!("[{}]", elements.join(","))
    }

    fn create_map(&self, entries: Vec<(String, String)>) -> String {
        let body: Vec<String> = entries
            .into_iter()
            .map(|(key, value)| format!("{key}:{value}"))
            .collect();
        format!("{{{}}}", body.join(","))
    }

    fn get_string(&self, input: &String) -> Option<String> {
        let inner = input.strip_prefix('"')?.strip_suffix('"')?;
        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => out.push(chars.next()?),
                // An unescaped interior quote means this is not one token.
                '"' => return None,
                other => out.push(other),
            }
        }
        Some(out)
    }

    fn get_int(&self, input: &String) -> Option<i32> {
        if has_numeric_suffix(input) {
            return None;
        }
        input.parse().ok()
    }

    fn get_long(&self, input: &String) -> Option<i64> {
        input.strip_suffix('L')?.parse().ok()
    }

    fn get_float(&self, input: &String) -> Option<f32> {
        input.strip_suffix('f')?.parse().ok()
    }

    fn get_double(&self, input: &String) -> Option<f64> {
        input.strip_suffix('d')?.parse().ok()
    }

    fn get_bool(&self, input: &String) -> Option<bool> {
        match input.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    fn get_list(&self, input: &String) -> Option<Vec<String>> {
        let inner = input.strip_prefix('[')?.strip_suffix(']')?;
        if inner.is_empty() {
            return Some(Vec::new());
        }
        let parts = split_top_level(inner, ',')?;
        Some(parts.into_iter().map(str::to_owned).collect())
    }

    fn get_map(&self, input: &String) -> Option<Vec<(String, String)>> {
        let inner = input.strip_prefix('{')?.strip_suffix('}')?;
        if inner.is_empty() {
            return Some(Vec::new());
        }
        let mut entries = Vec::new();
        for part in split_top_level(inner, ',')? {
            // Entries without a top-level colon have no key/value reading
            // and are skipped, like any other unreadable map entry.
            if let Some((key, value)) = split_entry(part) {
                entries.push((key.to_owned(), value.to_owned()));
            }
        }
        Some(entries)
    }

    fn empty(&self) -> String {
        String::new()
    }
}
