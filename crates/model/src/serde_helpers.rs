//! Lenient deserialization helpers for the upstream dataset.
//!
//! The doctor feed is third-party JSON with no schema guarantees. These
//! helpers let a field-level irregularity degrade to a default value instead
//! of failing the whole array. Every helper reads the raw
//! [`serde_json::Value`] first, so no out-of-contract field type can abort
//! the record it sits in.

use serde::{Deserialize, Deserializer};

/// Deserializes a string list field that may arrive as a bare string,
/// `null`, or an array with non-string entries mixed in.
pub fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(strings_from_value(value))
}

fn strings_from_value(value: serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::String(s) => vec![s],
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Deserializes a display string that may arrive as a number or another
/// scalar. Non-scalar values become the empty string.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(string_from_value(value))
}

fn string_from_value(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Deserializes a flag that may arrive as a `"true"`/`"false"` string or a
/// 0/1 number. Anything unrecognizable becomes `false`.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(bool_from_value(&value))
}

fn bool_from_value(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}

/// Deserializes a non-negative integer that may arrive as a JSON number,
/// a numeric string, or a string with a numeric prefix (`"13 Years"`).
///
/// Anything unreadable becomes `0` rather than an error.
pub fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(u32_from_value(&value))
}

fn u32_from_value(value: &serde_json::Value) -> u32 {
    match value {
        serde_json::Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u32::try_from(u).unwrap_or(u32::MAX)
            } else if let Some(f) = n.as_f64() {
                if f.is_sign_positive() { f as u32 } else { 0 }
            } else {
                0
            }
        }
        serde_json::Value::String(s) => {
            let digits: String = s
                .trim()
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse().unwrap_or(0)
        }
        _ => 0,
    }
}
