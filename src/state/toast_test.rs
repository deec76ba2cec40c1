use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.success("Login successful! Welcome back!");
    let second = state.error("Login failed");
    assert!(second > first);
    assert_eq!(state.items[0].level, ToastLevel::Success);
    assert_eq!(state.items[1].message, "Login failed");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let first = state.success("a");
    let second = state.success("b");
    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, second);

    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn oldest_toasts_are_evicted_past_capacity() {
    let mut state = ToastState::default();
    for i in 0..MAX_TOASTS + 2 {
        state.success(format!("toast {i}"));
    }
    assert_eq!(state.items.len(), MAX_TOASTS);
    assert_eq!(state.items[0].message, "toast 2");
}

#[test]
fn level_maps_to_css_class() {
    assert_eq!(ToastLevel::Success.css_class(), "toast toast--success");
    assert_eq!(ToastLevel::Error.css_class(), "toast toast--error");
}
