//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard bounces anonymous visitors to `/login`; the login page
//! bounces visitors who already hold a session back to `/`. Both wait until
//! the session cookie has been consulted.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// True once the cookie was read and holds no token.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    state.resolved && !state.is_authenticated()
}

/// True once the cookie was read and holds a token.
pub fn should_leave_login(state: &SessionState) -> bool {
    state.resolved && state.is_authenticated()
}

/// True once the cookie was read and holds a token, so the dashboard may call
/// `/api/summary`.
pub fn should_fetch_summary(state: &SessionState) -> bool {
    should_leave_login(state)
}

/// Redirect to `/login` whenever the session resolves without a token.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Full-page `location.replace(path)`. The next page load re-reads cookies,
/// and the current entry is dropped from history.
pub fn replace_location(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().replace(path) {
                log::warn!("location replace to {path} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
