//! API utilities for talking to the inventory server.
//!
//! Provides helpers for constructing endpoint URLs and for the JSON POST
//! round trip every endpoint uses.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_error::ApiError;
use contracts::domain::item::ErrorResponse;

/// Get the base URL for API requests.
///
/// Constructs the API base URL from the current window location, using
/// port 2000 for the inventory server, e.g. "http://127.0.0.1:2000".
/// Returns an empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:2000", protocol, hostname)
}

/// Build a full API URL from a path such as "/query".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// POST a JSON body to `path` and parse the JSON reply.
///
/// Every failure is mapped onto [`ApiError`]: transport failures become
/// [`ApiError::Network`], non-2xx replies become [`ApiError::Server`] with
/// the `detail` the server put in its error body, and unparseable success
/// bodies become [`ApiError::MalformedResponse`].
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|_| ApiError::Network)?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(err) => err.detail,
            Err(_) if body.is_empty() => "Unknown error".to_string(),
            Err(_) => body,
        };
        return Err(ApiError::Server { status, detail });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::MalformedResponse(e.to_string()))
}
