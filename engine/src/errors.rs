//! Error types for the calculation engine
//!
//! All errors are raised at the validation boundary; the arithmetic and
//! lookup operations downstream are total over validated input.

use thiserror::Error;

/// Engine-level error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("{0} must be a positive number")]
    NonPositiveValue(&'static str),

    #[error("invalid value {value:?} for {field}")]
    InvalidEnum { field: &'static str, value: String },

    #[error("unknown activity level: {0:?}")]
    UnknownActivityLevel(String),
}

impl EngineError {
    /// Stable machine-readable code for transport-layer error envelopes
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::MissingField(_) => "MISSING_FIELD",
            EngineError::NonPositiveValue(_) => "NON_POSITIVE_VALUE",
            EngineError::InvalidEnum { .. } => "INVALID_ENUM",
            EngineError::UnknownActivityLevel(_) => "UNKNOWN_ACTIVITY_LEVEL",
        }
    }

    /// The request field the error refers to, if it names one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            EngineError::MissingField(field) => Some(field),
            EngineError::NonPositiveValue(field) => Some(field),
            EngineError::InvalidEnum { field, .. } => Some(field),
            EngineError::UnknownActivityLevel(_) => Some("activity_level"),
        }
    }
}
