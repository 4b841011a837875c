use std::collections::BTreeMap;

use super::*;

fn goal(id: &str, title: &str, at: &str) -> CompletedGoal {
    CompletedGoal { id: id.to_owned(), title: title.to_owned(), completed_at: at.to_owned() }
}

fn summary(total: i64, completed: i64) -> Summary {
    Summary { total, completed, goals_per_day: None }
}

fn settled(summary: Option<Summary>, error: Option<&str>) -> DashboardState {
    DashboardState { loading: false, summary, error: error.map(str::to_owned) }
}

// =============================================================
// select_view
// =============================================================

#[test]
fn fresh_dashboard_is_loading() {
    assert_eq!(select_view(&DashboardState::default()), DashboardView::Loading);
}

#[test]
fn zero_total_renders_empty_state() {
    assert_eq!(select_view(&settled(Some(summary(0, 0)), None)), DashboardView::Empty);
}

#[test]
fn missing_summary_renders_empty_state() {
    assert_eq!(select_view(&settled(None, None)), DashboardView::Empty);
}

#[test]
fn positive_total_renders_summary_with_received_values() {
    let mut s = summary(7, 3);
    let mut days = BTreeMap::new();
    days.insert("2024-07-10".to_owned(), vec![goal("g1", "Read", "2024-07-10T21:04:00Z")]);
    s.goals_per_day = Some(days);

    match select_view(&settled(Some(s.clone()), None)) {
        DashboardView::Summary(rendered) => assert_eq!(rendered, s),
        other => panic!("expected summary view, got {other:?}"),
    }
}

#[test]
fn error_renders_empty_state_even_with_partial_data() {
    let state = settled(Some(summary(9, 4)), Some("unexpected status: 500"));
    assert_eq!(select_view(&state), DashboardView::Empty);
}

#[test]
fn loading_wins_over_stale_values() {
    let state = DashboardState { loading: true, summary: Some(summary(3, 1)), error: None };
    assert_eq!(select_view(&state), DashboardView::Loading);
}

#[test]
fn from_result_ok_settles_with_summary() {
    let state = DashboardState::from_result(Ok(summary(2, 1)));
    assert!(!state.loading);
    assert_eq!(state.summary, Some(summary(2, 1)));
    assert!(state.error.is_none());
}

#[test]
fn from_result_err_settles_with_error() {
    let state = DashboardState::from_result(Err(ApiError::Status(401)));
    assert!(!state.loading);
    assert!(state.summary.is_none());
    assert_eq!(state.error.as_deref(), Some("unexpected status: 401"));
    assert_eq!(select_view(&state), DashboardView::Empty);
}

// =============================================================
// completion_percent
// =============================================================

#[test]
fn completion_percent_rounds_to_nearest() {
    assert_eq!(completion_percent(1, 3), 33);
    assert_eq!(completion_percent(2, 3), 67);
    assert_eq!(completion_percent(1, 2), 50);
}

#[test]
fn completion_percent_clamps() {
    assert_eq!(completion_percent(0, 5), 0);
    assert_eq!(completion_percent(5, 0), 0);
    assert_eq!(completion_percent(12, 4), 100);
}

#[test]
fn completion_percent_handles_extreme_counts() {
    assert_eq!(completion_percent(100_000_000_000_000_000, 1), 100);
    assert_eq!(completion_percent(i64::MAX, i64::MAX), 100);
    assert_eq!(completion_percent(1, i64::MAX), 0);
    assert_eq!(completion_percent(i64::MAX / 2, i64::MAX), 50);
}

// =============================================================
// days_newest_first / completion_time
// =============================================================

#[test]
fn days_are_listed_newest_first() {
    let mut days = BTreeMap::new();
    days.insert("2024-07-08".to_owned(), vec![goal("a", "Swim", "2024-07-08T07:00:00Z")]);
    days.insert("2024-07-10".to_owned(), vec![goal("b", "Run", "2024-07-10T07:00:00Z")]);
    let s = Summary { total: 4, completed: 2, goals_per_day: Some(days) };

    let ordered: Vec<String> = days_newest_first(&s).into_iter().map(|(day, _)| day).collect();
    assert_eq!(ordered, vec!["2024-07-10".to_owned(), "2024-07-08".to_owned()]);
}

#[test]
fn days_newest_first_handles_null_map() {
    assert!(days_newest_first(&summary(3, 0)).is_empty());
}

#[test]
fn completion_time_extracts_hours_and_minutes() {
    assert_eq!(completion_time("2024-07-10T08:15:42.000Z"), "08:15");
}

#[test]
fn completion_time_passes_through_unparseable_values() {
    assert_eq!(completion_time("yesterday"), "yesterday");
    assert_eq!(completion_time("2024-07-10Tnoon"), "2024-07-10Tnoon");
}
