//! Brand mark shown on the login card, the loading screen, and the views.

use leptos::prelude::*;

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <svg
            class="logo"
            width="40"
            height="40"
            viewBox="0 0 40 40"
            fill="none"
            role="img"
            aria-label="Goals"
        >
            <circle cx="20" cy="20" r="18" stroke="currentColor" stroke-width="3"/>
            <circle cx="20" cy="20" r="10" stroke="currentColor" stroke-width="3"/>
            <circle cx="20" cy="20" r="3" fill="currentColor"/>
        </svg>
    }
}
