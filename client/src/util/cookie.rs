//! Session-token cookie helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `gltoken` cookie is the only durable client state. The login page
//! writes it; the app root reads it to decide whether the visitor is
//! authenticated. The host also reads it when forwarding `/api/summary`.
//!
//! Building and parsing go through the `cookie` crate and are pure, so they
//! can be tested natively; the `document.cookie` glue only exists under
//! `hydrate`.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use cookie::Cookie;
use cookie::time::{Duration, OffsetDateTime};

/// Cookie name holding the session token.
pub const SESSION_COOKIE: &str = "gltoken";

/// Session lifetime.
pub const SESSION_TTL: Duration = Duration::days(1);

/// Expiry instant for a session started at `now_ms` (ms since epoch, as
/// `Date.now()` reports it). `None` if the clock value is out of range.
pub fn session_expiry(now_ms: f64) -> Option<OffsetDateTime> {
    #[allow(clippy::cast_possible_truncation)]
    let now_nanos = i128::from(now_ms as i64) * 1_000_000;
    OffsetDateTime::from_unix_timestamp_nanos(now_nanos).ok()?.checked_add(SESSION_TTL)
}

/// Session cookie for `token`, scoped to `/` with a one-day lifetime.
///
/// `Max-Age` is always set; `Expires` is added when `now_ms` maps to a valid
/// instant so browsers that only honor one of them agree on the lifetime.
pub fn session_cookie(token: &str, now_ms: f64) -> Cookie<'static> {
    let mut builder = Cookie::build((SESSION_COOKIE, token.to_owned())).path("/").max_age(SESSION_TTL);
    if let Some(expires) = session_expiry(now_ms) {
        builder = builder.expires(expires);
    }
    builder.build()
}

/// The `document.cookie` assignment for a session token, percent-encoded so
/// separators inside the token survive the round trip.
pub fn build_session_cookie(token: &str, now_ms: f64) -> String {
    session_cookie(token, now_ms).encoded().to_string()
}

/// Find a cookie value by name in a raw `a=1; b=2` cookie string, decoding
/// percent-encoded values.
///
/// Empty values are treated as absent.
pub fn find_cookie(raw: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(raw)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_owned())
        .filter(|value| !value.is_empty())
}

/// Read the session token from `document.cookie`.
/// Always `None` outside the browser.
pub fn read_session_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = html_document()?.cookie().ok()?;
        find_cookie(&raw, SESSION_COOKIE)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token` in the session cookie with a 24-hour expiry.
///
/// # Errors
///
/// Returns an error string if the document is unavailable or the browser
/// rejects the cookie write.
pub fn write_session_token(token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let doc = html_document().ok_or_else(|| "document unavailable".to_owned())?;
        doc.set_cookie(&build_session_cookie(token, js_sys::Date::now()))
            .map_err(|e| format!("cookie write failed: {e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}
