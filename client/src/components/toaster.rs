//! Bottom-left toast stack.
//!
//! DESIGN
//! ======
//! Pages call [`notify`] instead of touching the queue directly so every toast
//! gets the same auto-dismiss timer.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_TTL_MS;

/// Queue a toast and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: &str) {
    let Some(id) = toasts.try_update(|state| state.push(kind, message)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(TOAST_TTL_MS, move || {
            let _ = toasts.try_update(|state| state.dismiss(id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Renders the toast queue from context.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster toaster--bottom-left" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.kind.css_modifier())
                            on:click=move |_| toasts.update(|state| state.dismiss(id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
