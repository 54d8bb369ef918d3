//! Startup session resolution.
//!
//! Runs exactly once per tab lifetime, before the first routed render is
//! committed. Exchanges a stored token for a verified profile; any failure
//! (expired, invalid, unreachable) silently resolves to unauthenticated and
//! clears the store — the user re-authenticates explicitly, nothing retries.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use std::future::Future;

use crate::net::error::ApiError;
use crate::net::types::Profile;
use crate::storage::{StorageBackend, TokenStore};

/// Outcome of the one-shot startup resolution.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    Unauthenticated,
    Authenticated(Profile),
}

/// Resolve the initial session against the store and the verify endpoint.
///
/// * No stored token: resolves unauthenticated without touching the network.
/// * Stored token: verifies it; on success the server profile is adopted and
///   written back (refreshing any stale local copy), on any error the store
///   is cleared entirely.
///
/// `verify` is the `GET /auth/me` call; it is a parameter so tests can drive
/// the flow without a browser.
pub async fn resolve_session<B, F, Fut>(store: &TokenStore<B>, verify: F) -> Resolution
where
    B: StorageBackend,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<Profile, ApiError>>,
{
    let Some(token) = store.load().token else {
        return Resolution::Unauthenticated;
    };

    match verify(token.clone()).await {
        Ok(profile) => {
            store.save(&token, &profile);
            Resolution::Authenticated(profile)
        }
        Err(err) => {
            log::warn!("stored token failed verification: {err}");
            store.clear();
            Resolution::Unauthenticated
        }
    }
}
