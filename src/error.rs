//! Unified SDK error types.

use thiserror::Error;

/// Message used when a failed envelope carries no `message` of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors produced by the transport adapter.
///
/// This is the single translation point: every raw transport failure and every
/// non-zero envelope ends up as one of these variants.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Transport(#[from] TransportError),

    /// The envelope came back with `code != 0` (or no readable envelope at all).
    #[error("{message}")]
    Api { code: Option<i64>, message: String },

    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

impl HttpError {
    /// Build an application failure, falling back to [`FALLBACK_ERROR_MESSAGE`].
    pub fn api(code: Option<i64>, message: Option<String>) -> Self {
        HttpError::Api {
            code,
            message: message.unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, HttpError::Transport(_))
    }
}

/// Failures reported by the host request primitive.
#[derive(Error, Debug)]
pub enum TransportError {
    #[cfg(feature = "http")]
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_server_message() {
        let err = HttpError::api(Some(1), Some("duplicate".to_string()));
        assert_eq!(err.to_string(), "duplicate");
    }

    #[test]
    fn test_api_error_falls_back_when_message_missing() {
        let err = HttpError::api(Some(500), None);
        assert_eq!(err.to_string(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_sdk_error_is_transparent_over_http() {
        let err: SdkError = HttpError::api(Some(1), Some("duplicate".into())).into();
        assert_eq!(err.to_string(), "duplicate");
    }

    #[test]
    fn test_transport_error_is_kept_intact() {
        let err: HttpError = TransportError::Other("connection refused".into()).into();
        assert!(err.is_transport());
        match err {
            HttpError::Transport(TransportError::Other(msg)) => {
                assert_eq!(msg, "connection refused")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
