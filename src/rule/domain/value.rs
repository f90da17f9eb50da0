//! Helpers over the dynamic value currency.
//!
//! Rules receive field data as `serde_json::Value` because the host model
//! layer hands the engine loosely-typed documents. These helpers give the
//! conditions a shared vocabulary for size, diagnostic rendering, and type
//! naming, so untrusted input can never panic a check.

use serde_json::Value;

/// Returns the size of a value for length-style checks.
///
/// Strings measure their character count, arrays their element count, and
/// objects their entry count. Values with no size concept (numbers,
/// booleans, null) and absent values measure 0, so they fail any positive
/// lower bound rather than slipping through.
#[must_use]
pub fn length_of(value: Option<&Value>) -> usize {
    value.map_or(0, |inner| match inner {
        Value::String(text) => text.chars().count(),
        Value::Array(items) => items.len(),
        Value::Object(entries) => entries.len(),
        Value::Null | Value::Bool(_) | Value::Number(_) => 0,
    })
}

/// Renders a value for inclusion in a diagnostic message.
///
/// Strings render bare (no surrounding quotes) so messages read naturally;
/// everything else renders as compact JSON. An absent value renders as
/// `none`.
#[must_use]
pub fn render(value: Option<&Value>) -> String {
    value.map_or_else(
        || "none".to_owned(),
        |inner| match inner {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        },
    )
}

/// Returns the JSON type name of a value, for diagnostics.
#[must_use]
pub const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
