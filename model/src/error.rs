//! Error taxonomy shared by every transport.

/// Failure of an admin API call.
///
/// `Status` and `Shape` are treated the same by callers (read views redirect,
/// mutations alert). A JSON parse failure on a 2xx response is never an error;
/// see [`crate::response::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("API Error: {status} {status_text}")]
    Status { status: u16, status_text: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response decoded but lacks a field the caller needs.
    #[error("unexpected response shape: missing {0}")]
    Shape(&'static str),
    /// The response JSON does not match the expected record type.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status carried by this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
