//! Dashboard page showing the goal summary.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Once the session resolves with a
//! token it fetches the summary a single time per mount (no refetch on focus,
//! no retry). It renders the loading, empty, or summary view chosen by
//! `state::summary::select_view`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::empty_goals::EmptyGoals;
use crate::components::logo::Logo;
use crate::components::summary::SummaryView;
use crate::state::session::SessionState;
use crate::state::summary::{DashboardState, DashboardView, select_view};
use crate::util::auth::install_unauth_redirect;

/// Dashboard page. Redirects to `/login` once the session resolves without a
/// token.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let dashboard = RwSignal::new(DashboardState::default());

    install_unauth_redirect(session, use_navigate());

    #[cfg(feature = "hydrate")]
    {
        let requested = StoredValue::new(false);
        Effect::new(move || {
            if !crate::util::auth::should_fetch_summary(&session.get()) || requested.get_value() {
                return;
            }
            requested.set_value(true);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_summary().await;
                if let Err(e) = &result {
                    log::warn!("summary fetch failed: {e}");
                }
                let _ = dashboard.try_set(DashboardState::from_result(result));
            });
        });
    }

    view! {
        {move || match select_view(&dashboard.get()) {
            DashboardView::Loading => {
                view! {
                    <div class="dashboard-page dashboard-page--loading">
                        <Logo/>
                    </div>
                }
                    .into_any()
            }
            DashboardView::Empty => {
                view! {
                    <div class="dashboard-page">
                        <EmptyGoals/>
                    </div>
                }
                    .into_any()
            }
            DashboardView::Summary(summary) => {
                view! {
                    <div class="dashboard-page">
                        <SummaryView summary=summary/>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
