use super::*;
use crate::storage::MemoryStorage;

fn profile(id: &str, onboarded: bool) -> Profile {
    Profile {
        id: id.to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        onboarding_complete: onboarded,
        income: None,
        budget_limits: None,
        savings_goal: None,
        credit_score: None,
        language: None,
    }
}

fn store() -> TokenStore<MemoryStorage> {
    TokenStore::new(MemoryStorage::default())
}

// =============================================================
// SessionState defaults and hydration
// =============================================================

#[test]
fn default_is_loading_with_no_user() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn hydrate_shows_cached_profile_while_loading() {
    let mut state = SessionState::default();
    state.hydrate(Some(profile("u1", true)));
    assert!(state.user.is_some());
    assert!(state.loading);
}

#[test]
fn hydrate_is_ignored_after_resolution() {
    let mut state = SessionState::default();
    state.resolve_unauthenticated();
    state.hydrate(Some(profile("u1", true)));
    assert!(state.user.is_none());
}

// =============================================================
// apply_profile and the epoch check
// =============================================================

#[test]
fn apply_profile_with_current_epoch_succeeds() {
    let mut state = SessionState::default();
    let epoch = state.epoch();
    assert!(state.apply_profile(profile("u1", true), epoch));
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
}

#[test]
fn apply_profile_with_stale_epoch_is_rejected() {
    let mut state = SessionState::default();
    let stale = state.epoch();
    state.clear();
    assert!(!state.apply_profile(profile("u1", true), stale));
    assert!(state.user.is_none());
}

#[test]
fn clear_bumps_epoch() {
    let mut state = SessionState::default();
    let before = state.epoch();
    state.clear();
    assert_eq!(state.epoch(), before + 1);
}

#[test]
fn resolve_unauthenticated_drops_hydrated_profile() {
    let mut state = SessionState::default();
    state.hydrate(Some(profile("u1", true)));
    state.resolve_unauthenticated();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

// =============================================================
// complete_auth
// =============================================================

#[test]
fn complete_auth_persists_and_applies() {
    let store = store();
    let mut state = SessionState::default();
    let started = state.epoch();

    assert!(complete_auth(&mut state, &store, "tok-1", profile("u1", false), started));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
    let stored = store.load();
    assert_eq!(stored.token.as_deref(), Some("tok-1"));
    assert_eq!(stored.profile.map(|p| p.id), Some("u1".to_owned()));
}

#[test]
fn logout_beats_stale_login_success() {
    let store = store();
    let mut state = SessionState::default();
    let started = state.epoch();

    // User signs out while the login response is still in flight.
    sign_out(&mut state, &store);

    assert!(!complete_auth(&mut state, &store, "tok-1", profile("u1", true), started));
    assert!(state.user.is_none());
    assert!(store.load().token.is_none());
}

#[test]
fn later_auth_wins_over_earlier_state() {
    let store = store();
    let mut state = SessionState::default();
    let first = state.epoch();
    assert!(complete_auth(&mut state, &store, "tok-1", profile("u1", true), first));

    // Same epoch: a second completed auth replaces the first.
    assert!(complete_auth(&mut state, &store, "tok-2", profile("u2", true), first));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u2"));
    assert_eq!(store.load().token.as_deref(), Some("tok-2"));
}

// =============================================================
// apply_profile_update
// =============================================================

#[test]
fn profile_update_replaces_profile_verbatim() {
    let store = store();
    let mut state = SessionState::default();
    let started = state.epoch();
    complete_auth(&mut state, &store, "tok-1", profile("u1", false), started);

    let updated = profile("u1", true);
    apply_profile_update(&mut state, &store, updated);
    assert!(state.user.as_ref().is_some_and(|u| u.onboarding_complete));
    assert!(store.load().profile.is_some_and(|p| p.onboarding_complete));
}

#[test]
fn profile_update_keeps_existing_token() {
    let store = store();
    let mut state = SessionState::default();
    let started = state.epoch();
    complete_auth(&mut state, &store, "tok-1", profile("u1", false), started);

    apply_profile_update(&mut state, &store, profile("u1", true));
    assert_eq!(store.load().token.as_deref(), Some("tok-1"));
}

// =============================================================
// sign_out
// =============================================================

#[test]
fn sign_out_clears_session_and_store() {
    let store = store();
    let mut state = SessionState::default();
    let started = state.epoch();
    complete_auth(&mut state, &store, "tok-1", profile("u1", true), started);

    sign_out(&mut state, &store);
    assert!(state.user.is_none());
    assert_eq!(store.load(), crate::storage::StoredSession::default());
}

#[test]
fn sign_out_is_idempotent() {
    let store = store();
    let mut state = SessionState::default();

    sign_out(&mut state, &store);
    let epoch_after_first = state.epoch();
    sign_out(&mut state, &store);

    assert!(state.user.is_none());
    assert!(store.load().token.is_none());
    // The second clear still bumps the epoch; what matters is that nothing
    // else changes and nothing panics.
    assert_eq!(state.epoch(), epoch_after_first + 1);
}
