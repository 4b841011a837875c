use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, header};
use axum::routing::{get, post};
use serde_json::{Value, json};
use tower::ServiceExt;

use super::*;
use crate::config::{ApiTimeouts, Config};
use crate::routes::api_routes;

// =============================================================================
// HELPERS
// =============================================================================

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind upstream");
    let addr = listener.local_addr().expect("upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("upstream serve");
    });
    format!("http://{addr}")
}

/// Base URL of a port nothing listens on.
async fn closed_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{addr}")
}

fn state_for(api_url: String) -> AppState {
    AppState::new(Config {
        port: 0,
        api_url,
        timeouts: ApiTimeouts { request_secs: 5, connect_secs: 1 },
        public_dir: PathBuf::from("public"),
    })
    .expect("state")
}

async fn call(state: AppState, req: Request<Body>) -> (StatusCode, Value) {
    let resp = api_routes(state).oneshot(req).await.expect("router call");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    // Extractor rejections are plain text; those read as `Null`.
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn login_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn summary_request(cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri("/api/summary");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).expect("request")
}

/// Upstream that accepts `maria` / `secret` and rejects everything else with
/// a 200 and no token.
fn fake_login_upstream() -> Router {
    Router::new().route(
        "/login",
        post(|axum::Json(body): axum::Json<Value>| async move {
            if body["username"] == "maria" && body["password"] == "secret" {
                axum::Json(json!({ "token": "tok-maria" }))
            } else {
                axum::Json(json!({ "message": "invalid" }))
            }
        }),
    )
}

/// Upstream that returns a summary only for `Bearer tok-maria`.
fn fake_summary_upstream() -> Router {
    Router::new().route(
        "/summary",
        get(|headers: HeaderMap| async move {
            let authorized = headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                == Some("Bearer tok-maria");
            if authorized {
                (
                    StatusCode::OK,
                    axum::Json(json!({ "total": 4, "completed": 1, "goalsPerDay": null })),
                )
            } else {
                (StatusCode::UNAUTHORIZED, axum::Json(json!({ "message": "unauthorized" })))
            }
        }),
    )
}

// =============================================================================
// LOGIN
// =============================================================================

#[tokio::test]
async fn login_relays_issued_token() {
    let state = state_for(spawn_upstream(fake_login_upstream()).await);
    let (status, body) = call(state, login_request(&json!({ "username": "maria", "password": "secret" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "token": "tok-maria" }));
}

#[tokio::test]
async fn login_relays_tokenless_response_unchanged() {
    let state = state_for(spawn_upstream(fake_login_upstream()).await);
    let (status, body) = call(state, login_request(&json!({ "username": "maria", "password": "nope" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn login_relays_upstream_error_status() {
    let upstream = Router::new().route(
        "/login",
        post(|| async { (StatusCode::UNAUTHORIZED, axum::Json(json!({ "message": "bad credentials" }))) }),
    );
    let state = state_for(spawn_upstream(upstream).await);
    let (status, body) = call(state, login_request(&json!({ "username": "a", "password": "b" }))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "bad credentials");
}

#[tokio::test]
async fn login_with_empty_upstream_body_relays_empty_object() {
    let upstream = Router::new().route("/login", post(|| async { StatusCode::UNAUTHORIZED }));
    let state = state_for(spawn_upstream(upstream).await);
    let (status, body) = call(state, login_request(&json!({ "username": "a", "password": "b" }))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn empty_success_is_relayed_as_ok_with_empty_object() {
    let upstream = Router::new().route("/summary", get(|| async { StatusCode::NO_CONTENT }));
    let state = state_for(spawn_upstream(upstream).await);
    let (status, body) = call(state, summary_request(Some("gltoken=tok"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn login_rejects_malformed_credentials_without_forwarding() {
    let state = state_for(closed_upstream().await);
    let (status, _) = call(state, login_request(&json!({ "username": 7 }))).await;
    assert!(status.is_client_error(), "got {status}");
}

#[tokio::test]
async fn login_with_unreachable_upstream_is_bad_gateway() {
    let state = state_for(closed_upstream().await);
    let (status, body) = call(state, login_request(&json!({ "username": "a", "password": "b" }))).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap_or_default().starts_with("upstream request failed"));
}

// =============================================================================
// SUMMARY
// =============================================================================

#[tokio::test]
async fn summary_forwards_cookie_token_as_bearer() {
    let state = state_for(spawn_upstream(fake_summary_upstream()).await);
    let (status, body) = call(state, summary_request(Some("theme=dark; gltoken=tok-maria"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "total": 4, "completed": 1, "goalsPerDay": null }));
}

#[tokio::test]
async fn summary_relays_upstream_unauthorized() {
    let state = state_for(spawn_upstream(fake_summary_upstream()).await);
    let (status, _) = call(state, summary_request(Some("gltoken=stale"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn summary_without_cookie_is_unauthorized_without_upstream_call() {
    // A closed upstream would produce 502 if it were contacted.
    let state = state_for(closed_upstream().await);
    let (status, body) = call(state, summary_request(None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "missing session cookie");
}

#[tokio::test]
async fn summary_with_empty_cookie_is_unauthorized() {
    let state = state_for(closed_upstream().await);
    let (status, _) = call(state, summary_request(Some("gltoken="))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn summary_with_non_json_upstream_is_bad_gateway() {
    let upstream = Router::new().route("/summary", get(|| async { "<html>oops</html>" }));
    let state = state_for(spawn_upstream(upstream).await);
    let (status, body) = call(state, summary_request(Some("gltoken=tok"))).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "upstream returned a non-JSON body (status 200)");
}

// =============================================================================
// MISC
// =============================================================================

#[tokio::test]
async fn healthz_is_ok() {
    let state = state_for(closed_upstream().await);
    let req = Request::builder().uri("/healthz").body(Body::empty()).expect("request");
    let (status, _) = call(state, req).await;
    assert_eq!(status, StatusCode::OK);
}

#[test]
fn proxy_error_statuses() {
    assert_eq!(ProxyError::MissingSession.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ProxyError::NotJson { status: 200 }.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn upstream_url_joins_base_and_path() {
    let state = state_for("http://api.test".to_owned());
    assert_eq!(state.upstream_url("/summary"), "http://api.test/summary");
}
