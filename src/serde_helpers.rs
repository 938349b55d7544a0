//! Serde helpers for envelope decoding.
//!
//! With the `tracing` feature enabled, fields the envelope types do not know about
//! are reported at `warn` level, and decode failures are reported with the JSON path
//! and the offending value. Without it, decoding is a plain `serde_json` call.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Renders a scalar JSON value as a string. Returns `None` for arrays and objects.
pub fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Deserializes `value`, logging unknown fields instead of rejecting them.
#[cfg(feature = "tracing")]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    use std::any::type_name;

    let original = value.clone();
    let mut unknown: Vec<String> = Vec::new();

    let decoded = serde_ignored::deserialize(value, |path| unknown.push(path.to_string()))
        .inspect_err(|_| {
            let traced: Result<T, _> = serde_path_to_error::deserialize(&original);
            if let Err(err) = traced {
                let path = err.path().to_string();
                tracing::error!(
                    type_name = %type_name::<T>(),
                    path = %path,
                    value = %describe(value_at(&original, &path)),
                    error = %err.inner(),
                    "envelope decoding failed"
                );
            }
        })?;

    for path in unknown {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            value = %describe(value_at(&original, &path)),
            "unknown field in API response"
        );
    }

    Ok(decoded)
}

#[cfg(not(feature = "tracing"))]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Walks `path` (`a.b[0].c`, `?` segments ignored) down from `root`.
#[cfg(feature = "tracing")]
fn value_at<'value>(root: &'value Value, path: &str) -> Option<&'value Value> {
    path.split(['.', '[', ']'])
        .filter(|segment| !segment.is_empty() && *segment != "?")
        .try_fold(root, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?),
            _ => None,
        })
}

#[cfg(feature = "tracing")]
fn describe(value: Option<&Value>) -> String {
    value.map_or_else(|| "<missing>".to_owned(), Value::to_string)
}
