use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn default_page_is_the_list_section() {
    let state = UiState::default();
    assert_eq!(state.page, ActivePage::List);
}

#[test]
fn default_has_no_toast_and_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert_eq!(state.toast, None);
    assert_eq!(state.toast_seq, 0);
}

// =============================================================
// ActivePage
// =============================================================

#[test]
fn active_page_default_is_list() {
    assert_eq!(ActivePage::default(), ActivePage::List);
}

#[test]
fn active_page_variants_are_distinct() {
    assert_ne!(ActivePage::List, ActivePage::Form);
}

// =============================================================
// Toast lifecycle
// =============================================================

#[test]
fn show_toast_sets_message_and_bumps_seq() {
    let mut state = UiState::default();
    state.show_toast("Blog created!", ToastKind::Success);
    assert_eq!(
        state.toast,
        Some(Toast { message: "Blog created!".to_owned(), kind: ToastKind::Success })
    );
    assert_eq!(state.toast_seq, 1);
}

#[test]
fn clear_toast_dismisses_current_seq() {
    let mut state = UiState::default();
    state.show_toast("Delete failed", ToastKind::Error);
    let seq = state.toast_seq;
    state.clear_toast(seq);
    assert_eq!(state.toast, None);
}

#[test]
fn stale_clear_does_not_dismiss_a_newer_toast() {
    let mut state = UiState::default();
    state.show_toast("first", ToastKind::Success);
    let stale_seq = state.toast_seq;
    state.show_toast("second", ToastKind::Error);
    state.clear_toast(stale_seq);
    assert_eq!(state.toast.as_ref().map(|t| t.message.as_str()), Some("second"));
}
