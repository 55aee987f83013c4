//! Failure taxonomy for calls against the scoring backend.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Shown when a rejection carries no usable `detail`.
pub const UNKNOWN_DETAIL: &str = "Unknown error";

/// Error returned by the REST helpers in `client` and `cli`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Backend answered with a non-2xx status.
    #[error("HTTP {status}: {detail}")]
    Rejected { status: u16, detail: String },
    /// The request never produced a response (offline, DNS, CORS, refused).
    #[error("request failed: {0}")]
    Transport(String),
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a rejection from a status code and the (possibly absent) body.
    #[must_use]
    pub fn rejected(status: u16, body: Option<&Value>) -> Self {
        let detail = body.map_or_else(|| UNKNOWN_DETAIL.to_owned(), detail_message);
        Self::Rejected { status, detail }
    }

    /// Alert text for a failed user action.
    ///
    /// Rejections show the backend detail after `rejected_prefix`; transport
    /// and decode failures collapse to the generic `unreachable` message.
    #[must_use]
    pub fn alert_text(&self, rejected_prefix: &str, unreachable: &str) -> String {
        match self {
            Self::Rejected { detail, .. } => format!("{rejected_prefix}{detail}"),
            Self::Transport(_) | Self::Decode(_) => unreachable.to_owned(),
        }
    }
}

/// Extract the `detail` message from an error body.
///
/// String details are returned verbatim; structured details (e.g. validation
/// error lists) are rendered as compact JSON.
#[must_use]
pub fn detail_message(body: &Value) -> String {
    match body.get("detail") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Null | Value::String(_)) | None => UNKNOWN_DETAIL.to_owned(),
        Some(other) => other.to_string(),
    }
}
