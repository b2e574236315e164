//! # Gated failure responses
//!
//! Turns an [`EngineError`] into a response after the negotiation gate
//! has decided whether the client is told about it.
//!
//! | failure | signaled | fall-through |
//! |---|---|---|
//! | not found | 404 + message | 404, empty body |
//! | bad payload on update | 500 + unchanged record | 200 + unchanged record |
//! | bad payload on create | 500 + message | 404, empty body |
//! | internal | 500 (never gated) | 500 (never gated) |
//!
//! An empty fall-through body is reported as 404, the status a response
//! gets when no handler produced a body.

use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::engine::EngineError;
use crate::negotiation::{should_signal_failure, AcceptedFormats, FailureGate};
use crate::observability::Event;

#[derive(Debug)]
pub struct GatedFailure {
    error: EngineError,
    signal: bool,
}

impl GatedFailure {
    pub fn new(error: EngineError, gate: FailureGate, accepted: &AcceptedFormats) -> Self {
        let signal = !error.is_negotiated() || should_signal_failure(gate, accepted);
        Self { error, signal }
    }

    pub fn from_headers(error: EngineError, gate: FailureGate, headers: &HeaderMap) -> Self {
        Self::new(error, gate, &AcceptedFormats::from_headers(headers))
    }

    pub fn is_signaled(&self) -> bool {
        self.signal
    }
}

impl IntoResponse for GatedFailure {
    fn into_response(self) -> Response {
        let status = self.error.status_code();

        if !self.is_signaled() {
            tracing::debug!(
                event = %Event::FailureSuppressed,
                status = status.as_u16(),
                reason = %self.error,
                "failure not signaled"
            );
        }

        match (self.error, self.signal) {
            (EngineError::Internal(message), _) => {
                tracing::error!(event = %Event::InternalFailure, %message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
            (EngineError::Processing { current: Some(record), .. }, true) => {
                (status, Json(record)).into_response()
            }
            (EngineError::Processing { current: Some(record), .. }, false) => {
                (StatusCode::OK, Json(record)).into_response()
            }
            (error, true) => (status, error.to_string()).into_response(),
            (_, false) => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn not_found() -> EngineError {
        EngineError::NotFound { label: "Forester" }
    }

    #[tokio::test]
    async fn test_signaled_not_found_carries_message() {
        let failure = GatedFailure::new(not_found(), FailureGate::default(), &AcceptedFormats::any());
        assert!(failure.is_signaled());

        let response = failure.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Forester not found!");
    }

    #[tokio::test]
    async fn test_suppressed_not_found_has_empty_body() {
        let json_only = AcceptedFormats::parse("application/json");
        let failure = GatedFailure::new(not_found(), FailureGate::default(), &json_only);
        assert!(!failure.is_signaled());

        let response = failure.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "");
    }

    #[tokio::test]
    async fn test_processing_failure_returns_current_record() {
        let error = EngineError::Processing {
            message: "Malformed questions".to_string(),
            current: Some(json!({"id": "t-1", "title": "Quiz"})),
        };
        let response = GatedFailure::new(error, FailureGate::default(), &AcceptedFormats::any())
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body, json!({"id": "t-1", "title": "Quiz"}));
    }

    #[tokio::test]
    async fn test_suppressed_processing_failure_still_returns_record() {
        let error = EngineError::Processing {
            message: "Malformed questions".to_string(),
            current: Some(json!({"id": "t-1"})),
        };
        let json_only = AcceptedFormats::parse("application/json");
        let response = GatedFailure::new(error, FailureGate::default(), &json_only).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, r#"{"id":"t-1"}"#);
    }

    #[tokio::test]
    async fn test_internal_failures_bypass_the_gate() {
        let json_only = AcceptedFormats::parse("application/json");
        let failure = GatedFailure::new(
            EngineError::Internal("lock poisoned".to_string()),
            FailureGate::default(),
            &json_only,
        );
        assert!(failure.is_signaled());

        let response = failure.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Internal Server Error");
    }
}
