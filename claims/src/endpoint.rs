//! REST paths exposed by the scoring backend.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

/// Backend origin used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// `GET` lists claims, `POST` submits one, `DELETE` removes one.
pub const CLAIMS_PATH: &str = "/api/claims";
/// `POST` multipart CSV upload that retrains the model.
pub const TRAIN_PATH: &str = "/api/train";
/// `GET` current model status.
pub const MODEL_STATUS_PATH: &str = "/api/model/status";

/// Multipart field name carrying the training CSV.
pub const TRAIN_FILE_FIELD: &str = "file";

/// Join a configured base URL and an API path.
#[must_use]
pub fn endpoint_url(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let base = if base.is_empty() { DEFAULT_API_BASE } else { base };
    format!("{base}{path}")
}
