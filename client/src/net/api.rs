//! REST API helpers for the login and summary endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the host's
//! same-origin `/api/*` routes, which forward to the upstream goals API.
//! Server-side (SSR): stubs returning an error since these calls are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an [`ApiError`]; pages decide how it is
//! surfaced. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, LoginResponse, Summary};

/// Same-origin login route.
pub const LOGIN_ENDPOINT: &str = "/api/login";

/// Same-origin summary route.
pub const SUMMARY_ENDPOINT: &str = "/api/summary";

/// Errors produced by API calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the server explicitly rejected the caller's credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401 | 403))
    }
}

/// Post credentials to the login endpoint.
///
/// # Errors
///
/// Returns [`ApiError::Request`] if the call fails in transit,
/// [`ApiError::Status`] on a non-2xx response, and [`ApiError::Decode`] if
/// the body is not a login response.
pub async fn login(credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(credentials)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Request("not available on server".to_owned()))
    }
}

/// Fetch the current user's summary. The session cookie rides along
/// automatically because the call is same-origin.
///
/// # Errors
///
/// Same classification as [`login`].
pub async fn fetch_summary() -> Result<Summary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SUMMARY_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<Summary>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Request("not available on server".to_owned()))
    }
}
