use super::*;

#[test]
fn toast_state_default_is_empty() {
    assert!(ToastState::default().items.is_empty());
}

#[test]
fn push_assigns_increasing_ids_in_order() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "welcome");
    let b = state.push(ToastKind::Error, "nope");
    assert!(b > a);
    let messages: Vec<&str> = state.items.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["welcome", "nope"]);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "a");
    let b = state.push(ToastKind::Error, "b");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Error, "a");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Error, "a");
    state.dismiss(a);
    let b = state.push(ToastKind::Error, "b");
    assert_ne!(a, b);
}

#[test]
fn toast_kind_css_modifiers_are_distinct() {
    assert_eq!(ToastKind::Success.css_modifier(), "toast--success");
    assert_eq!(ToastKind::Error.css_modifier(), "toast--error");
}
