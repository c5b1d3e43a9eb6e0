use std::io;

use thiserror::Error;

/// A payload value that failed validation.
///
/// Every variant carries the path of the offending value (rooted at `$`),
/// the name of the type the decoder expected there and a short description
/// of what was actually found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("{path}: missing required field, expected {expected}")]
    MissingField { path: String, expected: String },

    #[error("{path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: String,
        found: String,
    },

    #[error("{path}: unrecognized {expected} value {found}")]
    UnrecognizedValue {
        path: String,
        expected: String,
        found: String,
    },
}

impl DecodeError {
    pub fn path(&self) -> &str {
        match self {
            DecodeError::MissingField { path, .. }
            | DecodeError::TypeMismatch { path, .. }
            | DecodeError::UnrecognizedValue { path, .. } => path,
        }
    }

    pub fn expected(&self) -> &str {
        match self {
            DecodeError::MissingField { expected, .. }
            | DecodeError::TypeMismatch { expected, .. }
            | DecodeError::UnrecognizedValue { expected, .. } => expected,
        }
    }

    pub fn found(&self) -> &str {
        match self {
            DecodeError::MissingField { .. } => "nothing",
            DecodeError::TypeMismatch { found, .. }
            | DecodeError::UnrecognizedValue { found, .. } => found,
        }
    }

    /// Re-roots a string parse failure (which has no location) at `path`.
    pub(crate) fn at(self, path: &str) -> Self {
        match self {
            DecodeError::MissingField { expected, .. } => DecodeError::MissingField {
                path: path.to_string(),
                expected,
            },
            DecodeError::TypeMismatch {
                expected, found, ..
            } => DecodeError::TypeMismatch {
                path: path.to_string(),
                expected,
                found,
            },
            DecodeError::UnrecognizedValue {
                expected, found, ..
            } => DecodeError::UnrecognizedValue {
                path: path.to_string(),
                expected,
                found,
            },
        }
    }
}

/// Failures of the inspection binary while turning input bytes into a decoded value.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("unable to read payload: {0}")]
    Read(#[from] io::Error),

    #[error("payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("payload rejected: {0}")]
    Decode(#[from] DecodeError),
}
