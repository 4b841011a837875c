//! Empty-state view shown when there is nothing to summarise or the summary
//! could not be fetched.

use leptos::prelude::*;

use crate::components::logo::Logo;

#[component]
pub fn EmptyGoals() -> impl IntoView {
    view! {
        <div class="empty-goals">
            <Logo/>
            <p class="empty-goals__message">
                "You haven't registered any goals yet. How about starting one right now?"
            </p>
        </div>
    }
}
