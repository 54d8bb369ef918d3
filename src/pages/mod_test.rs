use leptos::prelude::*;

use super::*;
use crate::net::types::Profile;
use crate::state::ui::ToastKind;
use crate::storage::TokenStore;

fn profile(id: &str) -> Profile {
    Profile {
        id: id.to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        onboarding_complete: true,
        income: None,
        budget_limits: None,
        savings_goal: None,
        credit_score: None,
        language: None,
    }
}

fn signed_in() -> RwSignal<SessionState> {
    let mut state = SessionState::default();
    let epoch = state.epoch();
    state.apply_profile(profile("u1"), epoch);
    RwSignal::new(state)
}

// =============================================================
// 401 forces a full sign-out, whichever request raised it
// =============================================================

#[test]
fn unauthorized_error_signs_the_session_out() {
    let session = signed_in();
    let toasts = RwSignal::new(ToastState::default());

    handle_api_error(&ApiError::Unauthorized, session, TokenStore::browser(), toasts);

    assert!(session.get_untracked().user.is_none());
    assert!(!session.get_untracked().loading);
    let toast = toasts.get_untracked().current;
    assert_eq!(toast.map(|(kind, _)| kind), Some(ToastKind::Error));
}

#[test]
fn unauthorized_after_sign_out_changes_nothing_further() {
    let session = signed_in();
    let toasts = RwSignal::new(ToastState::default());

    handle_api_error(&ApiError::Unauthorized, session, TokenStore::browser(), toasts);
    let cleared = session.get_untracked();
    handle_api_error(&ApiError::Unauthorized, session, TokenStore::browser(), toasts);

    assert_eq!(session.get_untracked().user, cleared.user);
    assert_eq!(session.get_untracked().loading, cleared.loading);
}

// =============================================================
// Other failures only surface a toast
// =============================================================

#[test]
fn non_auth_errors_keep_the_session() {
    let session = signed_in();
    let toasts = RwSignal::new(ToastState::default());

    handle_api_error(
        &ApiError::Network("offline".to_owned()),
        session,
        TokenStore::browser(),
        toasts,
    );

    assert!(session.get_untracked().user.is_some());
    let toast = toasts.get_untracked().current;
    assert_eq!(toast.map(|(kind, _)| kind), Some(ToastKind::Error));
}
