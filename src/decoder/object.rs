use serde_json::{Map, Value};

use super::{mismatch, Decode};
use crate::utils::errors::DecodeError;

pub type Object = Map<String, Value>;

pub fn field_path(path: &str, key: &str) -> String {
    format!("{path}.{key}")
}

pub fn index_path(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

/// Requires `value` to be a JSON object; `expected` names the type being decoded.
pub fn object<'a>(value: &'a Value, path: &str, expected: &str) -> Result<&'a Object, DecodeError> {
    value
        .as_object()
        .ok_or_else(|| mismatch(path, expected, value))
}

/// A field that must be present and decode as `T`.
pub fn required<T: Decode>(object: &Object, path: &str, key: &str) -> Result<T, DecodeError> {
    let path = field_path(path, key);
    match object.get(key) {
        Some(value) => T::decode_at(value, &path),
        None => Err(DecodeError::MissingField {
            path,
            expected: T::TYPE_NAME.to_string(),
        }),
    }
}

/// A field that may be absent or `null`; any other value must decode as `T`.
pub fn nullable<T: Decode>(object: &Object, path: &str, key: &str) -> Result<Option<T>, DecodeError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::decode_at(value, &field_path(path, key)).map(Some),
    }
}

/// A field holding an array whose every element decodes as `T`.
///
/// `label` is the name reported when the field itself is missing or not an array.
pub fn array<T: Decode>(
    object: &Object,
    path: &str,
    key: &str,
    label: &str,
) -> Result<Vec<T>, DecodeError> {
    let path = field_path(path, key);
    match object.get(key) {
        Some(value) => elements(value, &path, label),
        None => Err(DecodeError::MissingField {
            path,
            expected: label.to_string(),
        }),
    }
}

/// Decodes every element of an array value, stopping at the first failure.
pub fn elements<T: Decode>(value: &Value, path: &str, label: &str) -> Result<Vec<T>, DecodeError> {
    let items = value.as_array().ok_or_else(|| mismatch(path, label, value))?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| T::decode_at(item, &index_path(path, i)))
        .collect()
}
