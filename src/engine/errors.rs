//! # Engine Errors
//!
//! Failure taxonomy of resource operations:
//! - `NotFound`: no record matches the supplied id
//! - `Processing`: a structured payload could not be decoded
//! - `Internal`: anything else; never gated by negotiation

use axum::http::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::schema::{PayloadError, Record};

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// No record with the requested id
    #[error("{label} not found!")]
    NotFound { label: &'static str },

    /// Malformed structured payload.
    ///
    /// `current` holds the unchanged record when the failure happened
    /// during an update; it is still sent back as the response body.
    #[error("{message}")]
    Processing {
        message: String,
        current: Option<Value>,
    },

    /// Unexpected failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EngineError {
    pub fn not_found<R: Record>() -> Self {
        EngineError::NotFound { label: R::LABEL }
    }

    pub fn processing(err: PayloadError, current: Option<Value>) -> Self {
        EngineError::Processing {
            message: err.to_string(),
            current,
        }
    }

    /// Status asserted when the failure is signaled
    pub fn status_code(&self) -> StatusCode {
        match self {
            EngineError::NotFound { .. } => StatusCode::NOT_FOUND,
            EngineError::Processing { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            EngineError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether content negotiation decides if this failure is signaled
    pub fn is_negotiated(&self) -> bool {
        !matches!(self, EngineError::Internal(_))
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Internal(format!("Failed to encode record: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Supervisor;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            EngineError::not_found::<Supervisor>().status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            EngineError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message_uses_label() {
        assert_eq!(
            EngineError::not_found::<Supervisor>().to_string(),
            "Supervisor not found!"
        );
    }

    #[test]
    fn test_internal_is_not_negotiated() {
        assert!(EngineError::not_found::<Supervisor>().is_negotiated());
        assert!(!EngineError::Internal("boom".to_string()).is_negotiated());
    }
}
