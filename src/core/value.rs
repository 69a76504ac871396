//! String projection of typed values.
//!
//! Environments only hold strings, so every parsed value is projected:
//!
//! - strings pass through unchanged
//! - datetimes become their RFC 3339 text
//! - integers, floats, booleans, arrays and tables become compact JSON
//!
//! Inside arrays and tables, datetimes are JSON strings. Non-finite floats
//! have no JSON number form and become JSON strings (`"nan"`, `"inf"`).

use serde_json::{Map, Number, Value as Json};
use toml::Value;

use crate::core::types::{ParsedMapping, StringifiedMapping};

/// Project one value to its string form.
pub fn project(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Datetime(dt) => dt.to_string(),
        other => to_json(other).to_string(),
    }
}

/// Project every value of a parsed mapping.
pub fn stringify(parsed: &ParsedMapping) -> StringifiedMapping {
    parsed
        .iter()
        .map(|(key, value)| (key.clone(), project(value)))
        .collect()
}

/// JSON form of a typed value.
pub fn to_json(value: &Value) -> Json {
    match value {
        Value::String(s) => Json::String(s.clone()),
        Value::Integer(i) => Json::from(*i),
        Value::Float(f) => Number::from_f64(*f)
            .map(Json::Number)
            .unwrap_or_else(|| Json::String(toml_float(*f))),
        Value::Boolean(b) => Json::Bool(*b),
        Value::Datetime(dt) => Json::String(dt.to_string()),
        Value::Array(items) => Json::Array(items.iter().map(to_json).collect()),
        Value::Table(table) => table_to_json(table),
    }
}

/// JSON object for a whole mapping.
pub fn table_to_json(table: &ParsedMapping) -> Json {
    let map: Map<String, Json> = table
        .iter()
        .map(|(key, value)| (key.clone(), to_json(value)))
        .collect();
    Json::Object(map)
}

/// Best-effort inverse of [`project`] for callers that know a value was structured.
///
/// Text that is not valid JSON comes back as a JSON string.
pub fn unproject(text: &str) -> Json {
    serde_json::from_str(text).unwrap_or_else(|_| Json::String(text.to_string()))
}

fn toml_float(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f.is_sign_negative() {
        "-inf".to_string()
    } else {
        "inf".to_string()
    }
}
