use std::cell::Cell;

use futures::executor::block_on;

use super::*;
use crate::storage::MemoryStorage;

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

fn store_with(token: &str, p: &Profile) -> TokenStore<MemoryStorage> {
    let store = TokenStore::new(MemoryStorage::default());
    store.save(token, p);
    store
}

// =============================================================
// No stored token
// =============================================================

#[test]
fn empty_store_resolves_unauthenticated_without_verifying() {
    let store = TokenStore::new(MemoryStorage::default());
    let calls = Cell::new(0_u32);

    let outcome = block_on(resolve_session(&store, |_token| {
        calls.set(calls.get() + 1);
        async { Ok(profile("u1")) }
    }));

    assert_eq!(outcome, Resolution::Unauthenticated);
    assert_eq!(calls.get(), 0);
}

// =============================================================
// Stored token, verification succeeds
// =============================================================

#[test]
fn valid_token_resolves_authenticated() {
    let store = store_with("tok-1", &profile("u1"));

    let outcome = block_on(resolve_session(&store, |token| async move {
        assert_eq!(token, "tok-1");
        Ok(profile("u1"))
    }));

    assert_eq!(outcome, Resolution::Authenticated(profile("u1")));
}

#[test]
fn verification_refreshes_the_cached_profile() {
    // The local copy is stale (different id); the server's wins.
    let store = store_with("tok-1", &profile("stale"));

    let _ = block_on(resolve_session(&store, |_token| async { Ok(profile("fresh")) }));

    let stored = store.load();
    assert_eq!(stored.token.as_deref(), Some("tok-1"));
    assert_eq!(stored.profile.map(|p| p.id), Some("fresh".to_owned()));
}

#[test]
fn login_then_restart_reproduces_the_session() {
    // What a completed login leaves in the store is exactly what a fresh
    // resolver needs to rebuild the session after a reload.
    let store = TokenStore::new(MemoryStorage::default());
    let mut state = crate::state::session::SessionState::default();
    let started = state.epoch();
    crate::state::session::complete_auth(&mut state, &store, "tok-1", profile("u1"), started);

    let outcome = block_on(resolve_session(&store, |token| async move {
        assert_eq!(token, "tok-1");
        Ok(profile("u1"))
    }));

    assert_eq!(outcome, Resolution::Authenticated(profile("u1")));
}

// =============================================================
// Stored token, verification fails
// =============================================================

#[test]
fn rejected_token_clears_the_store() {
    let store = store_with("tok-expired", &profile("u1"));

    let outcome = block_on(resolve_session(&store, |_token| async {
        Err(ApiError::Unauthorized)
    }));

    assert_eq!(outcome, Resolution::Unauthenticated);
    assert!(store.load().token.is_none());
    assert!(store.load().profile.is_none());

    // A subsequent startup finds the cleared store and never verifies.
    let calls = Cell::new(0_u32);
    let second = block_on(resolve_session(&store, |_token| {
        calls.set(calls.get() + 1);
        async { Ok(profile("u1")) }
    }));
    assert_eq!(second, Resolution::Unauthenticated);
    assert_eq!(calls.get(), 0);
}

#[test]
fn network_failure_also_resolves_unauthenticated() {
    let store = store_with("tok-1", &profile("u1"));

    let outcome = block_on(resolve_session(&store, |_token| async {
        Err(ApiError::Network("offline".to_owned()))
    }));

    assert_eq!(outcome, Resolution::Unauthenticated);
    assert!(store.load().token.is_none());
}
