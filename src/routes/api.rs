//! Same-origin API routes forwarding to the upstream goals API.
//!
//! The browser only ever talks to this host. `POST /api/login` relays the
//! credentials untouched; `GET /api/summary` lifts the session token out of
//! the `gltoken` cookie into a bearer header. Upstream status codes and JSON
//! bodies are passed back as-is.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use client::net::types::Credentials;
use client::util::cookie::SESSION_COOKIE;

use crate::state::AppState;

const LOGIN_PATH: &str = "/login";
const SUMMARY_PATH: &str = "/summary";

// =============================================================================
// ERRORS
// =============================================================================

/// Errors produced while forwarding a request upstream.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The request carried no session cookie.
    #[error("missing session cookie")]
    MissingSession,

    /// The upstream API could not be reached or timed out.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The upstream API answered with something other than JSON.
    #[error("upstream returned a non-JSON body (status {status})")]
    NotJson { status: u16 },
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingSession => StatusCode::UNAUTHORIZED,
            Self::Upstream(_) | Self::NotJson { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error = %self, "api forwarding failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "api request rejected");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/login` — forward credentials to `{api}/login`.
pub async fn login(State(state): State<AppState>, Json(credentials): Json<Credentials>) -> Result<Response, ProxyError> {
    let resp = state
        .http
        .post(state.upstream_url(LOGIN_PATH))
        .json(&credentials)
        .send()
        .await?;
    relay(LOGIN_PATH, resp).await
}

/// `GET /api/summary` — forward to `{api}/summary` with the cookie token as a
/// bearer credential.
pub async fn summary(State(state): State<AppState>, jar: CookieJar) -> Result<Response, ProxyError> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(Cookie::value)
        .filter(|t| !t.is_empty())
        .ok_or(ProxyError::MissingSession)?;

    let resp = state
        .http
        .get(state.upstream_url(SUMMARY_PATH))
        .bearer_auth(token)
        .send()
        .await?;
    relay(SUMMARY_PATH, resp).await
}

/// Pass an upstream JSON response back with its status. An empty body is
/// relayed as `{}` so clients can always decode JSON; an empty success (such
/// as `204 No Content`) becomes `200` since the relayed response now has a
/// body.
async fn relay(path: &str, resp: reqwest::Response) -> Result<Response, ProxyError> {
    let status = StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let body = resp.bytes().await?;
    let (status, value) = if body.is_empty() {
        let status = if status.is_success() { StatusCode::OK } else { status };
        (status, serde_json::json!({}))
    } else {
        let value = serde_json::from_slice::<serde_json::Value>(&body)
            .map_err(|_| ProxyError::NotJson { status: status.as_u16() })?;
        (status, value)
    };

    if !status.is_success() {
        tracing::info!(path, status = status.as_u16(), "upstream returned non-success");
    }
    Ok((status, Json(value)).into_response())
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
