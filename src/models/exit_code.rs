use crate::utils::errors::PayloadError;

/// Process exit codes of `arkham-inspect`.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Decoded = 00,

    ReadFailed = 10,
    MalformedJson = 11,
    DecodeFailed = 12,
}

impl From<&PayloadError> for ExitCode {
    fn from(error: &PayloadError) -> Self {
        match error {
            PayloadError::Read(_) => ExitCode::ReadFailed,
            PayloadError::Parse(_) => ExitCode::MalformedJson,
            PayloadError::Decode(_) => ExitCode::DecodeFailed,
        }
    }
}
