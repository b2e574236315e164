//! Lenient JSON request bodies
//!
//! The content type is not checked. An empty body is read as an empty
//! object, so every field of the target type takes its default.
//! A non-empty body that is not valid JSON for the target type is
//! rejected with 400.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;

pub struct LenientJson<T>(pub T);

#[derive(Debug)]
pub struct BodyRejection(String);

impl BodyRejection {
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, format!("Invalid request body: {}", self.0)).into_response()
    }
}

impl<T> LenientJson<T>
where
    T: DeserializeOwned + Default,
{
    pub fn decode(bytes: &[u8]) -> Result<Self, BodyRejection> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }
        serde_json::from_slice(bytes)
            .map(Self)
            .map_err(|err| BodyRejection(err.to_string()))
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| BodyRejection(err.body_text()))?;
        Self::decode(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{NicknameFields, TestPatch};

    #[test]
    fn test_empty_body_is_default() {
        let LenientJson(fields) = LenientJson::<NicknameFields>::decode(b"").unwrap();
        assert!(fields.nickname.is_none());

        let LenientJson(fields) = LenientJson::<NicknameFields>::decode(b"  \n").unwrap();
        assert!(fields.nickname.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let LenientJson(patch) =
            LenientJson::<TestPatch>::decode(br#"{"id": "x", "title": "T", "extra": 1}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("T"));
    }

    #[test]
    fn test_structured_questions_reach_the_engine() {
        let LenientJson(patch) =
            LenientJson::<TestPatch>::decode(br#"{"questions": [{"text": "x"}]}"#).unwrap();
        assert!(patch.questions.is_some());
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let rejection = LenientJson::<NicknameFields>::decode(b"{nickname").err().unwrap();
        assert!(!rejection.message().is_empty());
        assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        assert!(LenientJson::<NicknameFields>::decode(br#"{"nickname": 5}"#).is_err());
    }
}
