use super::*;

// =============================================================
// Toast text selection
// =============================================================

#[test]
fn submit_success_toast_matches_branch() {
    assert_eq!(submit_success_toast(false), "Blog created!");
    assert_eq!(submit_success_toast(true), "Blog updated!");
}

#[test]
fn submit_fallback_matches_branch() {
    assert_eq!(submit_fallback(false), "Create failed");
    assert_eq!(submit_fallback(true), "Update failed");
}

#[test]
fn fetch_fallbacks_are_stable() {
    assert_eq!(FETCH_LIST_FALLBACK, "Failed to fetch blogs");
    assert_eq!(FETCH_ONE_FALLBACK, "Failed to fetch blog");
    assert_eq!(DELETE_FALLBACK, "Delete failed");
}
