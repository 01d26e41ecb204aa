//! Shared behaviour of request parameter objects.
//!
//! Optional fields are plain `Option`s marked with `skip_serializing_if = "Option::is_none"`:
//! `None` never reaches the wire, while `Some("")`, `Some(0)` and `Some(false)` do.
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{Error, Result};

pub(crate) const EMPTY_UPDATE: &str = "at least one field must be provided for update action";

/// A request body for a write operation.
pub trait RequestParams: Serialize {
    /// The wire representation, with every absent field omitted.
    fn api_data(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(Error::validation(format!(
                "parameters must serialize to a JSON object, got {other}"
            ))),
        }
    }
}

/// Fail unless at least one field of a partial update is set.
pub(crate) fn ensure_any_field(present: &[bool]) -> Result<()> {
    if present.iter().any(|is_set| *is_set) {
        Ok(())
    } else {
        Err(Error::validation(EMPTY_UPDATE))
    }
}

/// Wrap parameters under a single root key, e.g. `{"contact": {...}}`.
pub(crate) fn wrap<P: RequestParams + ?Sized>(root: &str, params: &P) -> Result<Value> {
    let mut body = Map::new();
    body.insert(root.to_owned(), Value::Object(params.api_data()?));
    Ok(Value::Object(body))
}

/// The message read-state endpoint expects `"true"`/`"false"` strings instead of booleans.
pub(crate) fn bool_as_str<S: Serializer>(
    value: &bool,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "true" } else { "false" })
}
