//! REST API helpers for communicating with the scoring backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so pages can tell a backend
//! rejection (show its `detail`) from a connectivity failure (show a generic
//! message) without panicking during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use claims::{ApiError, ClaimRecord, ClaimSubmission, DEFAULT_API_BASE, ModelStatus, TrainResponse};
use serde_json::Value;

/// `<meta name=...>` carrying the backend origin rendered by the server shell.
pub const API_BASE_META: &str = "claims-api-base";

/// Backend location, provided to components through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base: DEFAULT_API_BASE.to_owned() }
    }
}

impl ApiConfig {
    /// Normalize a configured base URL; blank input falls back to the default.
    #[must_use]
    pub fn new(base: &str) -> Self {
        let base = base.trim().trim_end_matches('/');
        if base.is_empty() { Self::default() } else { Self { base: base.to_owned() } }
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        claims::endpoint_url(&self.base, path)
    }

    /// Read the backend origin from the server-rendered meta tag.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{API_BASE_META}\"]");
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"))
                .map_or_else(Self::default, |base| Self::new(&base))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn not_an_array_message(body: &Value) -> String {
    let kind = match body {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    format!("expected a JSON array of claims, got {kind}")
}

/// Keep object rows, dropping anything else the backend put in the array.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if `body` is not an array.
#[cfg(any(test, feature = "hydrate"))]
fn records_from_body(body: Value) -> Result<Vec<ClaimRecord>, ApiError> {
    match body {
        Value::Array(items) => Ok(items.into_iter().filter_map(ClaimRecord::from_value).collect()),
        other => Err(ApiError::Decode(not_an_array_message(&other))),
    }
}

#[cfg(feature = "hydrate")]
fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[cfg(feature = "hydrate")]
fn js_error(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(format!("{e:?}"))
}

/// Decode a response body, turning non-2xx statuses into rejections.
#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let body = resp.json::<Value>().await.ok();
        let err = ApiError::rejected(resp.status(), body.as_ref());
        log::warn!("{} {}: {err}", resp.status(), resp.url());
        return Err(err);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Submit a claim via `POST /api/claims`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the backend `detail` on a non-2xx
/// status, or a transport/decode error if no usable response arrived.
pub async fn submit_claim(config: &ApiConfig, submission: &ClaimSubmission) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.url(claims::CLAIMS_PATH))
            .json(submission)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json::<Value>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, submission);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch all submitted claims from `GET /api/claims`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a JSON array.
pub async fn fetch_claims(config: &ApiConfig) -> Result<Vec<ClaimRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.url(claims::CLAIMS_PATH))
            .send()
            .await
            .map_err(transport)?;
        let body = read_json::<Value>(resp).await?;
        records_from_body(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch the active model status from `GET /api/model/status`.
///
/// # Errors
///
/// Returns an error if the request fails or the body does not decode.
pub async fn fetch_model_status(config: &ApiConfig) -> Result<ModelStatus, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.url(claims::MODEL_STATUS_PATH))
            .send()
            .await
            .map_err(transport)?;
        read_json::<ModelStatus>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Upload a training CSV as multipart field `file` to `POST /api/train`.
///
/// The file's raw bytes were already read for the preview, so they are
/// re-wrapped unchanged in a `Blob` under the original file name.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the backend `detail` when training
/// fails, or a transport error if the upload could not be sent.
pub async fn train_model(config: &ApiConfig, file_name: &str, bytes: &[u8]) -> Result<TrainResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
        let form = web_sys::FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(claims::endpoint::TRAIN_FILE_FIELD, &blob, file_name)
            .map_err(js_error)?;

        let resp = gloo_net::http::Request::post(&config.url(claims::TRAIN_PATH))
            .body(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json::<TrainResponse>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, file_name, bytes);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Delete one claim via `DELETE /api/claims?customer_id=..&timestamp=..`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] if the backend cannot find or remove the
/// claim, or a transport error if the request fails.
pub async fn delete_claim(config: &ApiConfig, customer_id: &str, timestamp: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&config.url(claims::CLAIMS_PATH))
            .query([("customer_id", customer_id), ("timestamp", timestamp)])
            .send()
            .await
            .map_err(transport)?;
        read_json::<Value>(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, customer_id, timestamp);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}
