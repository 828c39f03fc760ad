//! The `{code, message?, data?}` envelope every endpoint responds with.

use crate::error::HttpError;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response envelope. `code == 0` is the only success discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: None,
            data: Some(data),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Classify a raw response body.
///
/// A body that is not JSON, has no integer `code`, or has a non-zero `code` is an
/// application failure. An empty `message` counts as absent.
pub(crate) fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<ApiResponse<T>, HttpError> {
    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return Err(HttpError::api(None, None)),
    };

    let code = value.get("code").and_then(Value::as_i64);
    if code != Some(0) {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string);
        return Err(HttpError::api(code, message));
    }

    serde_json::from_value(value).map_err(|e| HttpError::Deserialize(e.to_string()))
}
