//! Summary view: completion progress plus the per-day completion log.

use leptos::prelude::*;

use crate::components::logo::Logo;
use crate::net::types::{CompletedGoal, Summary};
use crate::state::summary::{completion_percent, completion_time, days_newest_first};

#[component]
pub fn SummaryView(summary: Summary) -> impl IntoView {
    let percent = completion_percent(summary.completed, summary.total);
    let days = days_newest_first(&summary);

    view! {
        <div class="summary">
            <header class="summary__header">
                <Logo/>
                <h1 class="summary__title">"Your goals"</h1>
            </header>

            <section class="summary__progress">
                <div
                    class="summary__bar"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=percent.to_string()
                >
                    <div class="summary__bar-fill" style=format!("width: {percent}%")></div>
                </div>
                <p class="summary__counts">
                    "You completed "
                    <span class="summary__completed">{summary.completed}</span>
                    " of "
                    <span class="summary__total">{summary.total}</span>
                    " goals, "
                    <span class="summary__percent">{format!("{percent}%")}</span>
                    "."
                </p>
            </section>

            <section class="summary__days">
                <h2>"Completed"</h2>
                {if days.is_empty() {
                    view! { <p class="summary__none">"Nothing completed yet."</p> }.into_any()
                } else {
                    view! {
                        <ul class="summary__day-list">
                            {days.into_iter().map(|(day, goals)| view! { <DayEntry day=day goals=goals/> }).collect::<Vec<_>>()}
                        </ul>
                    }
                    .into_any()
                }}
            </section>
        </div>
    }
}

/// One day of completions in the log.
#[component]
fn DayEntry(day: String, goals: Vec<CompletedGoal>) -> impl IntoView {
    view! {
        <li class="summary__day">
            <h3 class="summary__day-label">{day}</h3>
            <ul class="summary__goal-list">
                {goals
                    .into_iter()
                    .map(|goal| {
                        let at = completion_time(&goal.completed_at);
                        view! {
                            <li class="summary__goal">
                                <span class="summary__goal-title">{goal.title}</span>
                                <span class="summary__goal-time">{at}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </li>
    }
}
