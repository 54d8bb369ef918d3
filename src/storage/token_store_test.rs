use super::*;

fn profile(id: &str) -> Profile {
    Profile {
        id: id.to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        onboarding_complete: false,
        income: None,
        budget_limits: None,
        savings_goal: None,
        credit_score: None,
        language: None,
    }
}

// =============================================================
// Round trips
// =============================================================

#[test]
fn empty_store_loads_nothing() {
    let store = TokenStore::new(MemoryStorage::default());
    assert_eq!(store.load(), StoredSession::default());
}

#[test]
fn save_then_load_returns_the_pair() {
    let store = TokenStore::new(MemoryStorage::default());
    store.save("tok-1", &profile("u1"));

    let stored = store.load();
    assert_eq!(stored.token.as_deref(), Some("tok-1"));
    assert_eq!(stored.profile, Some(profile("u1")));
}

#[test]
fn save_overwrites_previous_pair() {
    let store = TokenStore::new(MemoryStorage::default());
    store.save("tok-1", &profile("u1"));
    store.save("tok-2", &profile("u2"));

    let stored = store.load();
    assert_eq!(stored.token.as_deref(), Some("tok-2"));
    assert_eq!(stored.profile.map(|p| p.id), Some("u2".to_owned()));
}

// =============================================================
// Clearing
// =============================================================

#[test]
fn clear_removes_both_entries() {
    let store = TokenStore::new(MemoryStorage::default());
    store.save("tok-1", &profile("u1"));
    store.clear();
    assert_eq!(store.load(), StoredSession::default());
}

#[test]
fn clear_on_empty_store_is_a_noop() {
    let store = TokenStore::new(MemoryStorage::default());
    store.clear();
    assert_eq!(store.load(), StoredSession::default());
}

// =============================================================
// Corrupt entries soft-fail
// =============================================================

#[test]
fn unparsable_profile_loads_as_absent_but_keeps_token() {
    let backend = MemoryStorage::default();
    backend.set(TOKEN_KEY, "tok-1");
    backend.set(PROFILE_KEY, "{not json");
    let store = TokenStore::new(backend);

    let stored = store.load();
    assert_eq!(stored.token.as_deref(), Some("tok-1"));
    assert!(stored.profile.is_none());
}

#[test]
fn token_without_profile_still_loads() {
    let backend = MemoryStorage::default();
    backend.set(TOKEN_KEY, "tok-1");
    let store = TokenStore::new(backend);

    let stored = store.load();
    assert_eq!(stored.token.as_deref(), Some("tok-1"));
    assert!(stored.profile.is_none());
}
