//! Request Errors
//!
//! Every failure of a remote store call is normalized into [`ApiError`].
//! `Display` yields exactly the message shown to the user.

use reqwest::StatusCode;
use serde_json::Value;

/// Result of a remote store call
pub type ApiResult<T> = Result<T, ApiError>;

/// A failed remote store call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, CORS...)
    #[error("{0}")]
    Transport(String),
    /// The store answered with a non-success status
    #[error("{message}")]
    Status { status: u16, message: String },
    /// A success response whose body is not the expected JSON
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a non-success response.
    ///
    /// The message is the body's non-empty `error` string when there is one,
    /// otherwise `HTTP <status>: <status text>`.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = error_field(body).unwrap_or_else(|| status_line(status));
        ApiError::Status {
            status: status.as_u16(),
            message,
        }
    }

    /// HTTP status code, for status errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

fn error_field(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

fn status_line(status: StatusCode) -> String {
    format!(
        "HTTP {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("")
    )
}
