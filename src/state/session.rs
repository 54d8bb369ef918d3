//! Session state and its single-writer mutation operations.
//!
//! The session is the client's current belief about who (if anyone) is
//! authenticated and whether they finished onboarding. View code never
//! mutates it directly; every write goes through the operations at the
//! bottom of this module, which also keep the [`TokenStore`] in lockstep so
//! a reload reflects the latest resolved state.
//!
//! CONCURRENCY
//! ===========
//! Mutations suspend only at network boundaries and the UI disables
//! re-entry while one is outstanding, but a completed `logout` must still
//! beat any later-arriving stale success (e.g. a slow login response landing
//! after the user signed out). A monotonic epoch enforces that: it is
//! captured before the network call and checked before the result is
//! applied, and `clear` bumps it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Profile;
use crate::storage::{StorageBackend, TokenStore};

/// Authentication state for the current tab.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<Profile>,
    /// True only from process start until the initial resolution completes;
    /// never true again afterwards.
    pub loading: bool,
    epoch: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState { user: None, loading: true, epoch: 0 }
    }
}

impl SessionState {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Optimistically show a locally cached profile while the startup
    /// verification is still outstanding. Leaves `loading` untouched, so the
    /// route gate keeps overriding this value for access decisions.
    pub fn hydrate(&mut self, cached: Option<Profile>) {
        if self.loading {
            self.user = cached;
        }
    }

    /// Adopt a server-confirmed profile, unless the state moved on since the
    /// request started. Returns whether the profile was applied.
    pub fn apply_profile(&mut self, profile: Profile, started_epoch: u64) -> bool {
        if started_epoch != self.epoch {
            return false;
        }
        self.user = Some(profile);
        self.loading = false;
        true
    }

    /// Conclude resolution as unauthenticated.
    pub fn resolve_unauthenticated(&mut self) {
        if self.loading || self.user.is_some() {
            self.user = None;
            self.loading = false;
        }
    }

    /// Drop the session. Bumps the epoch so in-flight requests that started
    /// before this point can no longer apply their result.
    pub fn clear(&mut self) {
        self.user = None;
        self.loading = false;
        self.epoch += 1;
    }
}

/// Finish a login or register call: persist the pair, then update memory.
/// Returns false (and changes nothing) when a logout completed in between.
pub fn complete_auth<B: StorageBackend>(
    state: &mut SessionState,
    store: &TokenStore<B>,
    token: &str,
    profile: Profile,
    started_epoch: u64,
) -> bool {
    if started_epoch != state.epoch() {
        log::info!("discarding stale auth success; session changed while request was in flight");
        return false;
    }
    store.save(token, &profile);
    state.apply_profile(profile, started_epoch)
}

/// Replace the profile with the server's returned record after a confirmed
/// edit (onboarding completion, settings changes). The returned object is
/// authoritative verbatim; nothing is merged.
pub fn apply_profile_update<B: StorageBackend>(
    state: &mut SessionState,
    store: &TokenStore<B>,
    profile: Profile,
) {
    if let Some(token) = store.load().token {
        store.save(&token, &profile);
    }
    let epoch = state.epoch();
    state.apply_profile(profile, epoch);
}

/// Log out, or force-invalidate after a 401. Synchronous, never fails, and
/// idempotent: clearing an already-empty store and session is a no-op.
pub fn sign_out<B: StorageBackend>(state: &mut SessionState, store: &TokenStore<B>) {
    store.clear();
    state.clear();
}
