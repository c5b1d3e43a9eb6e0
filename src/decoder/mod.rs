//! Explicit validation of untyped JSON into the strongly-typed models.
//!
//! Decoding is all-or-nothing: the first value that fails aborts the whole
//! decode and its error is returned unchanged, so callers never see a
//! partially built value.

pub mod object;

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::utils::errors::DecodeError;

/// Path of the value handed to [`decode`].
pub const ROOT: &str = "$";

/// A type that can be validated out of a [`serde_json::Value`].
pub trait Decode: Sized {
    /// Name reported as the expected type when decoding fails.
    const TYPE_NAME: &'static str;

    /// Decodes `value`, which sits at `path` inside the payload.
    fn decode_at(value: &Value, path: &str) -> Result<Self, DecodeError>;
}

/// Decodes a whole payload.
pub fn decode<T: Decode>(value: &Value) -> Result<T, DecodeError> {
    T::decode_at(value, ROOT)
}

/// Routes a serde `Deserialize` impl through [`Decode`], so both entry points
/// accept and reject exactly the same payloads.
pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Decode,
{
    let value = Value::deserialize(deserializer)?;
    decode(&value).map_err(serde::de::Error::custom)
}

/// Short human-readable description of a JSON value for error messages.
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(items) => format!("array of {} elements", items.len()),
        Value::Object(_) => "object".to_string(),
    }
}

pub(crate) fn mismatch(path: &str, expected: &str, value: &Value) -> DecodeError {
    DecodeError::TypeMismatch {
        path: path.to_string(),
        expected: expected.to_string(),
        found: describe(value),
    }
}

/// Failure of a closed enumeration; `path` is filled in by [`literal`].
pub(crate) fn unrecognized(type_name: &str, value: &str) -> DecodeError {
    DecodeError::UnrecognizedValue {
        path: String::new(),
        expected: type_name.to_string(),
        found: format!("string {value:?}"),
    }
}

/// Decodes a closed string enumeration: the value must be a string that
/// matches one of the literals exactly. Anything else, strings or not, is an
/// unrecognized value of `T`.
pub fn literal<T>(value: &Value, path: &str) -> Result<T, DecodeError>
where
    T: Decode + FromStr<Err = DecodeError>,
{
    let text = value.as_str().ok_or_else(|| DecodeError::UnrecognizedValue {
        path: path.to_string(),
        expected: T::TYPE_NAME.to_string(),
        found: describe(value),
    })?;
    text.parse::<T>().map_err(|e| e.at(path))
}

impl Decode for String {
    const TYPE_NAME: &'static str = "string";

    fn decode_at(value: &Value, path: &str) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(mismatch(path, Self::TYPE_NAME, other)),
        }
    }
}

impl Decode for u32 {
    const TYPE_NAME: &'static str = "non-negative integer";

    fn decode_at(value: &Value, path: &str) -> Result<Self, DecodeError> {
        value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| mismatch(path, Self::TYPE_NAME, value))
    }
}
