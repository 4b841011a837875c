//! Dashboard fetch state and view selection.
//!
//! DESIGN
//! ======
//! The dashboard renders exactly one of three views. Selection is a pure
//! function of the fetch state so the branching rules are unit-testable
//! without a browser.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use crate::net::api::ApiError;
use crate::net::types::{CompletedGoal, Summary};

/// Result of the single summary fetch performed per dashboard mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardState {
    pub loading: bool,
    pub summary: Option<Summary>,
    pub error: Option<String>,
}

impl Default for DashboardState {
    /// A freshly mounted dashboard is waiting on its fetch.
    fn default() -> Self {
        Self { loading: true, summary: None, error: None }
    }
}

impl DashboardState {
    /// Settled state for a completed fetch.
    pub fn from_result(result: Result<Summary, ApiError>) -> Self {
        match result {
            Ok(summary) => Self { loading: false, summary: Some(summary), error: None },
            Err(e) => Self { loading: false, summary: None, error: Some(e.to_string()) },
        }
    }
}

/// The mutually exclusive dashboard views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardView {
    Loading,
    Empty,
    Summary(Summary),
}

/// Pick the view for `state`.
///
/// Errors win over any summary data; a missing summary or a zero total is
/// empty.
pub fn select_view(state: &DashboardState) -> DashboardView {
    if state.loading {
        return DashboardView::Loading;
    }
    if state.error.is_some() {
        return DashboardView::Empty;
    }
    match &state.summary {
        Some(summary) if summary.total > 0 => DashboardView::Summary(summary.clone()),
        _ => DashboardView::Empty,
    }
}

/// Completion percentage, clamped to `0..=100`.
pub fn completion_percent(completed: i64, total: i64) -> u8 {
    if total <= 0 || completed <= 0 {
        return 0;
    }
    let (completed, total) = (i128::from(completed), i128::from(total));
    let pct = (completed * 200 + total) / (total * 2);
    u8::try_from(pct.min(100)).unwrap_or(100)
}

/// Days with completions, newest first. Goals within a day keep upstream order.
pub fn days_newest_first(summary: &Summary) -> Vec<(String, Vec<CompletedGoal>)> {
    summary
        .goals_per_day
        .as_ref()
        .map(|days| days.iter().rev().map(|(day, goals)| (day.clone(), goals.clone())).collect())
        .unwrap_or_default()
}

/// `HH:MM` portion of an ISO-8601 timestamp, or the raw value if it does not
/// look like one.
pub fn completion_time(completed_at: &str) -> String {
    completed_at
        .split_once('T')
        .and_then(|(_, time)| time.get(..5))
        .filter(|hm| hm.as_bytes().get(2) == Some(&b':'))
        .map_or_else(|| completed_at.to_owned(), str::to_owned)
}
