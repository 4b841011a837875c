//! Login page: username/password form that stores the session cookie.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits credentials once, classifies the answer into one of three
//! outcomes, and drives the button label, the toast, the cookie write, and the
//! delayed redirect from that outcome. Visitors who already hold a session are
//! sent straight to `/`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::logo::Logo;
use crate::net::api::ApiError;
use crate::net::types::{Credentials, LoginResponse};
use crate::state::session::SessionState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::{replace_location, should_leave_login};

/// Pause between a successful login and the redirect, so the welcome toast is
/// visible.
pub const REDIRECT_DELAY_MS: u64 = 2000;

pub const WELCOME_MESSAGE: &str = "Welcome back!";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password!";
pub const REQUEST_FAILED_MESSAGE: &str = "We could not authenticate you. Please try again!";

/// Submit button display state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Failure,
}

impl ButtonStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Sign in to Goals",
            Self::Pending => "Loading...",
            Self::Success => "Success!",
            Self::Failure => "Hey, try signing in again",
        }
    }

    pub fn is_disabled(self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// What a login attempt amounted to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(String),
    InvalidCredentials,
    RequestFailed,
}

impl LoginOutcome {
    /// Classify a login call. A 2xx body without a token and an explicit
    /// 401/403 both mean the credentials were rejected.
    pub fn classify(result: Result<LoginResponse, ApiError>) -> Self {
        match result {
            Ok(resp) => match resp.token() {
                Some(token) => Self::Authenticated(token.to_owned()),
                None => Self::InvalidCredentials,
            },
            Err(e) if e.is_unauthorized() => Self::InvalidCredentials,
            Err(_) => Self::RequestFailed,
        }
    }

    pub fn button_status(&self) -> ButtonStatus {
        match self {
            Self::Authenticated(_) => ButtonStatus::Success,
            Self::InvalidCredentials | Self::RequestFailed => ButtonStatus::Failure,
        }
    }

    pub fn toast(&self) -> (ToastKind, &'static str) {
        match self {
            Self::Authenticated(_) => (ToastKind::Success, WELCOME_MESSAGE),
            Self::InvalidCredentials => (ToastKind::Error, INVALID_CREDENTIALS_MESSAGE),
            Self::RequestFailed => (ToastKind::Error, REQUEST_FAILED_MESSAGE),
        }
    }

    /// Persist the session token of an authenticated outcome through `write`.
    ///
    /// Other outcomes never call `write`. A failed write downgrades the attempt
    /// to `RequestFailed`. The returned flag says whether to redirect to `/`.
    pub fn persist<W>(self, write: W) -> (Self, bool)
    where
        W: FnOnce(&str) -> Result<(), String>,
    {
        let Self::Authenticated(token) = &self else {
            return (self, false);
        };
        match write(token) {
            Ok(()) => (self, true),
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::warn!("session cookie write failed: {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = e;
                (Self::RequestFailed, false)
            }
        }
    }

    /// Transport failures clear the form; rejected credentials keep it for
    /// correction.
    pub fn resets_form(&self) -> bool {
        matches!(self, Self::RequestFailed)
    }
}

/// Input `type` for the password field.
pub fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

/// Icon for the visibility toggle: the eye while masked, the struck eye while
/// revealed.
pub fn visibility_icon(visible: bool) -> &'static str {
    if visible { "/visibility-off.svg" } else { "/visibility.svg" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(ButtonStatus::default());
    let password_visible = RwSignal::new(false);

    Effect::new(move || {
        if should_leave_login(&session.get()) {
            replace_location("/");
        }
    });

    let reset_form = move || {
        username.set(String::new());
        password.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_disabled() {
            return;
        }
        status.set(ButtonStatus::Pending);
        let credentials = Credentials { username: username.get_untracked(), password: password.get_untracked() };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let (outcome, redirect) = LoginOutcome::classify(crate::net::api::login(&credentials).await)
                .persist(crate::util::cookie::write_session_token);
            if !redirect {
                log::warn!("login did not authenticate: {outcome:?}");
            }

            let (kind, message) = outcome.toast();
            crate::components::toaster::notify(toasts, kind, message);
            status.set(outcome.button_status());
            if outcome.resets_form() {
                reset_form();
            }

            if redirect {
                gloo_timers::future::sleep(std::time::Duration::from_millis(REDIRECT_DELAY_MS)).await;
                reset_form();
                replace_location("/");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, toasts, reset_form);
        }
    };

    view! {
        <section class="login-page">
            <form class="login-card" method="post" on:submit=on_submit>
                <div class="login-card__brand">
                    <Logo/>
                    <h1>"Login"</h1>
                </div>
                <div class="login-form">
                    <label class="login-label" for="username">"Username"</label>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        autofocus
                        autocomplete="username"
                        placeholder="maria_helena"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="password">"Password"</label>
                    <div class="login-password">
                        <input
                            id="password"
                            class="login-input"
                            type=move || password_input_type(password_visible.get())
                            autocomplete="current-password"
                            placeholder="Use numbers, letters, and special characters"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <img
                            class="login-password__toggle"
                            src=move || visibility_icon(password_visible.get())
                            alt="Show/hide password"
                            on:click=move |_| password_visible.update(|v| *v = !*v)
                        />
                    </div>
                </div>
                <a class="login-card__signup" href="/new-account">
                    "New to Goals? Create an account now!"
                </a>
                <footer class="login-card__footer">
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || status.get().is_disabled()
                    >
                        {move || status.get().label()}
                    </button>
                </footer>
            </form>
        </section>
    }
}
