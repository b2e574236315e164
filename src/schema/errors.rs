//! Payload decoding errors

use thiserror::Error;

/// Result type for structured payload handling
pub type PayloadResult<T> = Result<T, PayloadError>;

/// A structured payload field could not be decoded
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Malformed {field}: {source}")]
    Malformed {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl PayloadError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            PayloadError::Malformed { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = PayloadError::Malformed {
            field: "questions",
            source,
        };
        assert_eq!(err.field(), "questions");
        assert!(err.to_string().starts_with("Malformed questions:"));
    }
}
