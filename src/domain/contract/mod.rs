//! Per-tool prompt contracts and response validators.
//!
//! Each tool module owns its system instruction, a canonical contract
//! example (serialized into the user prompt), deterministic user-prompt
//! rendering, and a strict validator over the raw completion text.
//! Validation is all-or-nothing: the first violated invariant aborts and
//! nothing partial is ever returned.

pub mod content_direction;
pub mod engagement_signal;
pub mod extract;
pub mod hook_clarity;
pub mod message_positioning;
pub mod weekly_reflection;

use serde_json::{Map, Value};

use super::errors::{Result, ToolError};

pub(crate) fn unexpected(detail: impl Into<String>) -> ToolError {
    ToolError::UnexpectedFormat(detail.into())
}

pub(crate) fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| unexpected(format!("{} must be an object", what)))
}

pub(crate) fn req_str(obj: &Map<String, Value>, key: &str) -> Result<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| unexpected(format!("'{}' must be a string", key)))
}

pub(crate) fn req_object<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Map<String, Value>> {
    obj.get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| unexpected(format!("'{}' must be an object", key)))
}

pub(crate) fn req_array<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a Vec<Value>> {
    obj.get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| unexpected(format!("'{}' must be an array", key)))
}

pub(crate) fn exact_len(items: &[Value], key: &str, expected: usize) -> Result<()> {
    if items.len() != expected {
        return Err(unexpected(format!(
            "'{}' must have exactly {} entries, got {}",
            key,
            expected,
            items.len()
        )));
    }
    Ok(())
}

pub(crate) fn bounded_len(items: &[Value], key: &str, min: usize, max: usize) -> Result<()> {
    if items.len() < min || items.len() > max {
        return Err(unexpected(format!(
            "'{}' must have {} to {} entries, got {}",
            key,
            min,
            max,
            items.len()
        )));
    }
    Ok(())
}

pub(crate) fn string_items(items: &[Value], key: &str) -> Result<Vec<String>> {
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| unexpected(format!("'{}' entries must be strings", key)))
        })
        .collect()
}

/// Numeric fields sometimes arrive as numeric-looking strings; accept
/// both, reject everything non-finite.
pub(crate) fn coerce_number(obj: &Map<String, Value>, key: &str) -> Result<f64> {
    let value = obj
        .get(key)
        .ok_or_else(|| unexpected(format!("'{}' is required", key)))?;
    let number = match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| unexpected(format!("'{}' is out of range", key)))?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| unexpected(format!("'{}' must be numeric", key)))?,
        _ => return Err(unexpected(format!("'{}' must be numeric", key))),
    };
    if !number.is_finite() {
        return Err(unexpected(format!("'{}' must be a finite number", key)));
    }
    Ok(number)
}

// ── tests ─────────────────────────────────────────────────────────────────────
