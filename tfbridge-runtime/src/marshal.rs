//! Conversion between typed resources and raw provider attributes.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::BridgeError;
use crate::provider::{RawConfig, RawState};

/// Marshals a typed value into raw provider configuration.
///
/// Unset optional fields are left out of the attribute map.
///
/// # Errors
/// Returns `BridgeError` if the value cannot be serialized or is not a
/// struct-like value.
pub fn marshal<T: Serialize + ?Sized>(value: &T) -> Result<RawConfig, BridgeError> {
    match serde_json::to_value(value).map_err(BridgeError::Marshal)? {
        Value::Object(map) => Ok(map),
        other => Err(BridgeError::NotAnObject {
            found: json_kind(&other),
        }),
    }
}

/// Unmarshals raw provider state into a typed value.
///
/// Attributes the type does not declare are ignored.
///
/// # Errors
/// Returns `BridgeError` if a required attribute is missing or has the
/// wrong shape.
pub fn unmarshal<T: DeserializeOwned>(state: RawState) -> Result<T, BridgeError> {
    serde_json::from_value(Value::Object(state)).map_err(BridgeError::Unmarshal)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
