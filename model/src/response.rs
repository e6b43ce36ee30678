//! Response normalization policy for admin API calls.
//!
//! POLICY
//! ======
//! 1. Non-2xx status fails with [`ApiError::Status`].
//! 2. `content-length: 0`, a missing or non-JSON content type, or a blank
//!    body yields a synthetic success.
//! 3. A body that fails JSON parsing yields a synthetic success carrying the
//!    raw text.
//! 4. Anything else is returned as parsed JSON.
//!
//! The backend answers deletes with assorted empty or plain-text bodies, so
//! the policy must stay exactly as above for both transports.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::board::{BoardDetailResponse, BoardPage, RawBoard};
use crate::comment::RawComment;
use crate::error::ApiError;

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

/// Status line and the headers the policy inspects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseMeta {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub content_length: Option<String>,
}

impl ResponseMeta {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Whether the body has to be read to decide the outcome.
    ///
    /// When this is `false` the response is already known to be a synthetic
    /// success (or an error), so transports can skip reading the body.
    #[must_use]
    pub fn needs_body(&self) -> bool {
        if !self.is_success() || self.content_length.as_deref() == Some("0") {
            return false;
        }
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"))
    }
}

/// Normalized outcome of a successful admin API call.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse {
    /// Synthetic success: empty, non-JSON or unparseable body.
    Success { message: Option<String> },
    /// Parsed JSON body.
    Json(Value),
}

/// Apply the normalization policy.
///
/// `body` is ignored unless [`ResponseMeta::needs_body`] is true; pass `None`
/// when the transport skipped reading it.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for any status outside `200..=299`.
pub fn normalize(meta: &ResponseMeta, body: Option<&str>) -> Result<ApiResponse, ApiError> {
    if !meta.is_success() {
        return Err(ApiError::Status { status: meta.status, status_text: meta.status_text.clone() });
    }
    if !meta.needs_body() {
        return Ok(ApiResponse::Success { message: None });
    }
    let text = body.unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(ApiResponse::Success { message: None });
    }
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Ok(ApiResponse::Json(value)),
        Err(_) => Ok(ApiResponse::Success { message: Some(text.to_owned()) }),
    }
}

impl ApiResponse {
    /// Whether a mutation response reports success.
    ///
    /// Synthetic successes always pass. JSON passes when `success` or
    /// `isSuccess` is `true`, or when there is no truthy `error` field.
    #[must_use]
    pub fn is_success(&self) -> bool {
        match self {
            Self::Success { .. } => true,
            Self::Json(value) => {
                value.get("success").and_then(Value::as_bool) == Some(true)
                    || value.get("isSuccess").and_then(Value::as_bool) == Some(true)
                    || !value.get("error").is_some_and(is_truthy)
            }
        }
    }

    /// Server-provided message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message } => message.as_deref(),
            Self::Json(value) => value.get("message").and_then(Value::as_str),
        }
    }

    /// Decode the board list envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Shape`] when the response is not JSON or has no
    /// `content` array, and [`ApiError::Decode`] when records fail to decode.
    pub fn into_board_page(self) -> Result<BoardPage, ApiError> {
        let value = self.into_json("content")?;
        if !value.get("content").is_some_and(Value::is_array) {
            return Err(ApiError::Shape("content"));
        }
        decode(value)
    }

    /// Decode a board detail, requiring `boardDetail` to be present.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Shape`] when the response is not JSON or lacks
    /// `boardDetail`, and [`ApiError::Decode`] when records fail to decode.
    pub fn into_board_detail(self) -> Result<(RawBoard, Vec<RawComment>), ApiError> {
        let detail: BoardDetailResponse = decode(self.into_json("boardDetail")?)?;
        let board = detail.board_detail.ok_or(ApiError::Shape("boardDetail"))?;
        Ok((board, detail.comments))
    }

    fn into_json(self, expected: &'static str) -> Result<Value, ApiError> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Success { .. } => Err(ApiError::Shape(expected)),
        }
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(value)?)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
