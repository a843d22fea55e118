use std::fmt;

use crate::case::CaseId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field contract was violated (non-positive case id, empty description).
    InvalidArgument(String),
    LockPoisoned(&'static str),
    /// Restored data contains the same case id twice.
    DuplicateCaseId(CaseId),
    Serde(String),
}

impl RecordError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        RecordError::InvalidArgument(message.into())
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::InvalidArgument(message) => write!(f, "invalid argument: {}", message),
            RecordError::LockPoisoned(operation) => {
                write!(f, "records lock poisoned during {}", operation)
            }
            RecordError::DuplicateCaseId(id) => write!(f, "duplicate case id {}", id),
            RecordError::Serde(message) => write!(f, "serialization error: {}", message),
        }
    }
}

impl std::error::Error for RecordError {}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        RecordError::Serde(err.to_string())
    }
}

#[cfg(feature = "bitcode")]
impl From<bitcode::Error> for RecordError {
    fn from(err: bitcode::Error) -> Self {
        RecordError::Serde(err.to_string())
    }
}
