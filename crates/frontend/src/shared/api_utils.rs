//! API utilities for frontend-backend communication
//!
//! Base-URL resolution, the error taxonomy for backend calls and the
//! fetch helpers the rest of the app builds on. Every call is a fresh
//! request; there is no caching, retrying or timeout layer here.

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use wasm_bindgen::JsCast;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// What went wrong talking to the backend.
///
/// `Validation` is surfaced inline at forms, `Network`/`Server` are shown
/// to the user as one generic failure; the distinction only matters for
/// logging.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport failure, or a response body we could not read/decode.
    Network(String),
    /// Non-2xx status outside the validation range.
    Server(u16, String),
    /// The backend rejected the submitted data (HTTP 400/422).
    Validation(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Server(status, _) => write!(f, "Server error (HTTP {})", status),
            ApiError::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Map a non-2xx response to the error taxonomy.
///
/// FastAPI reports rejected form data with 422 (and some handlers with
/// 400); everything else is a server-side failure. The `detail` field is
/// extracted when the body is the usual `{"detail": ...}` envelope.
pub fn error_for_status(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str().map(String::from)))
        .unwrap_or_else(|| body.trim().to_string());

    match status {
        400 | 422 => {
            if detail.is_empty() {
                ApiError::Validation("The backend rejected the submitted data".to_string())
            } else {
                ApiError::Validation(detail)
            }
        }
        _ => ApiError::Server(status, detail),
    }
}

static API_BASE: Lazy<String> = Lazy::new(resolve_api_base);

fn resolve_api_base() -> String {
    // Build-time override, e.g. API_BASE_URL=https://api.example.com/api/v1
    if let Some(base) = option_env!("API_BASE_URL") {
        return base.trim_end_matches('/').to_string();
    }

    // Otherwise derive from the current window location; the backend
    // listens on port 8000 and serves the API under /api/v1.
    let window = match web_sys::window() {
        Some(w) => w,
        None => return "http://localhost:8000/api/v1".to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000/api/v1", protocol, hostname)
}

/// Get the base URL for API requests, resolved once per session.
pub fn api_base() -> &'static str {
    &API_BASE
}

/// Build a full API URL from a path like `/resources/study-materials/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET a JSON payload.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&api_url(path), &opts)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    let (status, text) = send(&request).await?;
    decode_body(status, &text)
}

/// POST a JSON body and decode a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let body = serde_json::to_string(body).map_err(|e| ApiError::Network(format!("{e}")))?;
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&api_url(path), &opts)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    let (status, text) = send(&request).await?;
    decode_body(status, &text)
}

/// POST a multipart form (the browser sets the boundary header itself).
pub async fn post_form<T: DeserializeOwned>(path: &str, form: &FormData) -> Result<T, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form);

    let request = Request::new_with_str_and_init(&api_url(path), &opts)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    let (status, text) = send(&request).await?;
    decode_body(status, &text)
}

/// Execute a prepared request, returning status and body text. Non-2xx
/// statuses are already mapped to `ApiError` here.
async fn send(request: &Request) -> Result<(u16, String), ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    let status = resp.status();
    let text = wasm_bindgen_futures::JsFuture::from(
        resp.text()
            .unwrap_or_else(|_| js_sys::Promise::resolve(&wasm_bindgen::JsValue::from_str(""))),
    )
    .await
    .ok()
    .and_then(|v| v.as_string())
    .unwrap_or_default();

    if !resp.ok() {
        return Err(error_for_status(status, &text));
    }

    Ok((status, text))
}

fn decode_body<T: DeserializeOwned>(status: u16, text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text)
        .map_err(|e| ApiError::Network(format!("invalid response (HTTP {status}): {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_statuses_extract_detail() {
        let err = error_for_status(422, r#"{"detail":"title must not be empty"}"#);
        assert_eq!(err, ApiError::Validation("title must not be empty".into()));

        let err = error_for_status(400, "bad request");
        assert_eq!(err, ApiError::Validation("bad request".into()));
    }

    #[test]
    fn other_statuses_map_to_server() {
        let err = error_for_status(500, r#"{"detail":"Query failed: boom"}"#);
        assert_eq!(err, ApiError::Server(500, "Query failed: boom".into()));
        assert_eq!(err.to_string(), "Server error (HTTP 500)");
    }

    #[test]
    fn empty_validation_body_gets_generic_message() {
        let err = error_for_status(422, "");
        assert!(matches!(err, ApiError::Validation(msg) if !msg.is_empty()));
    }

    #[test]
    fn display_is_user_readable() {
        assert_eq!(
            ApiError::Network("failed to fetch".into()).to_string(),
            "Network error: failed to fetch"
        );
        assert_eq!(
            ApiError::Validation("file too large".into()).to_string(),
            "file too large"
        );
    }
}
