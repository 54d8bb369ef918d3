use super::*;

// =============================================================
// ToastState
// =============================================================

#[test]
fn default_has_no_toast() {
    assert!(ToastState::default().current.is_none());
}

#[test]
fn success_and_error_set_their_kind() {
    let mut toasts = ToastState::default();
    toasts.success("saved");
    assert_eq!(toasts.current, Some((ToastKind::Success, "saved".to_owned())));
    toasts.error("nope");
    assert_eq!(toasts.current, Some((ToastKind::Error, "nope".to_owned())));
}

#[test]
fn new_toast_replaces_the_previous_one() {
    let mut toasts = ToastState::default();
    toasts.success("first");
    toasts.success("second");
    assert_eq!(toasts.current.map(|(_, m)| m), Some("second".to_owned()));
}

#[test]
fn dismiss_clears_the_slot() {
    let mut toasts = ToastState::default();
    toasts.error("gone soon");
    toasts.dismiss();
    assert!(toasts.current.is_none());
}

// =============================================================
// ShellState
// =============================================================

#[test]
fn sidebar_starts_closed() {
    assert!(!ShellState::default().sidebar_open);
}
