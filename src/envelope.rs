//! Response envelope decoding.
//!
//! Every endpoint answers with the same wrapper:
//!
//! ```json
//! { "get": "fixtures", "parameters": {"id": "215662"}, "errors": [],
//!   "results": 1, "paging": {"current": 1, "total": 1}, "response": [ ... ] }
//! ```
//!
//! A non-empty `errors` field turns the whole envelope into an [`Api`](crate::error::Api)
//! error before anything else in the body is looked at.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DisplayFromStr, PickFirst, serde_as, skip_serializing_none};

use crate::Result;
use crate::error::Error;
use crate::serde_helpers;

/// Pagination cursor reported by list endpoints.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub current: u32,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub total: u32,
}

impl Paging {
    #[must_use]
    pub fn new(current: u32, total: u32) -> Self {
        Self { current, total }
    }
}

/// A successfully decoded API response.
#[skip_serializing_none]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    /// Endpoint path echoed back by the API.
    pub get: String,
    pub parameters: HashMap<String, String>,
    /// Always empty on a decoded envelope.
    pub errors: HashMap<String, String>,
    pub results: u32,
    pub paging: Option<Paging>,
    pub response: Vec<Value>,
}

impl Envelope {
    /// First item of `response`, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.response.first()
    }

    /// Consumes the envelope, keeping only its first item.
    #[must_use]
    pub fn into_first(self) -> Option<Value> {
        self.response.into_iter().next()
    }
}

#[serde_as]
#[derive(Deserialize)]
struct RawEnvelope {
    get: String,
    #[serde(default)]
    parameters: Value,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    results: u32,
    #[serde(default)]
    paging: Option<Paging>,
    response: Value,
}

/// Decodes a response body into an [`Envelope`].
///
/// # Errors
///
/// - [`Kind::MalformedResponse`](crate::error::Kind::MalformedResponse) if `body` is not a
///   JSON object with `get`, `results` and `response` fields.
/// - [`Kind::Api`](crate::error::Kind::Api) if `errors` is non-empty. The message is the first
///   error in wire order.
pub fn decode(body: &str) -> Result<Envelope> {
    let mut value: Value = serde_json::from_str(body)?;

    let Some(object) = value.as_object_mut() else {
        return Err(Error::malformed("expected a JSON object at the top level"));
    };

    if let Some(message) = object.remove("errors").as_ref().and_then(first_error) {
        return Err(Error::api(message));
    }

    let raw: RawEnvelope = serde_helpers::deserialize_with_warnings(value)?;

    Ok(Envelope {
        get: raw.get,
        parameters: string_map(raw.parameters)?,
        errors: HashMap::new(),
        results: raw.results,
        paging: raw.paging,
        response: normalize_response(raw.response),
    })
}

/// The first error message carried by an `errors` field, or `None` when it is empty.
fn first_error(errors: &Value) -> Option<String> {
    let first = match errors {
        Value::Null | Value::Bool(false) => return None,
        Value::String(message) if message.is_empty() => return None,
        Value::Object(map) => map.values().next()?,
        Value::Array(items) => items.first()?,
        other => other,
    };

    Some(match first {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    })
}

/// `parameters` is an object of scalars, or `[]` when the request had none.
fn string_map(value: Value) -> Result<HashMap<String, String>> {
    match value {
        Value::Null => Ok(HashMap::new()),
        Value::Array(items) if items.is_empty() => Ok(HashMap::new()),
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| {
                serde_helpers::scalar_to_string(value)
                    .map(|value| (key.clone(), value))
                    .ok_or_else(|| Error::malformed(format!("parameter `{key}` is not a scalar")))
            })
            .collect(),
        _ => Err(Error::malformed("`parameters` must be an object")),
    }
}

/// Flattens `response` into an ordered sequence.
///
/// Objects keyed entirely by integers become their values sorted by key; any other
/// object is a single item.
fn normalize_response(value: Value) -> Vec<Value> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        Value::Object(map) => {
            let keyed: Option<Vec<(i64, Value)>> = map
                .iter()
                .map(|(key, item)| key.parse::<i64>().ok().map(|index| (index, item.clone())))
                .collect();

            match keyed {
                Some(mut items) => {
                    items.sort_by_key(|(index, _)| *index);
                    items.into_iter().map(|(_, item)| item).collect()
                }
                None => vec![Value::Object(map)],
            }
        }
        other => vec![other],
    }
}
