//! Page components, one per routed view.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod dashboard;
pub mod goals;
pub mod insights;
pub mod login;
pub mod onboarding;
pub mod profile;
pub mod register;
pub mod statements;
pub mod transactions;

use leptos::prelude::RwSignal;
use leptos::prelude::Update;

use crate::net::error::ApiError;
use crate::state::session::{self, SessionState};
use crate::state::ui::ToastState;
use crate::storage::ClientStore;

/// Shared failure path for authenticated page requests.
///
/// A 401 is a hard session invalidation: clear everything and let the route
/// gate redirect to login (clearing an already-cleared session is a no-op).
/// Everything else just surfaces as a toast.
pub(crate) fn handle_api_error(
    err: &ApiError,
    session: RwSignal<SessionState>,
    store: ClientStore,
    toasts: RwSignal<ToastState>,
) {
    if err.is_unauthorized() {
        session.update(|s| session::sign_out(s, &store));
    }
    toasts.update(|t| t.error(err.user_message()));
}

/// The stored bearer token, if any.
pub(crate) fn bearer(store: &ClientStore) -> Option<String> {
    store.load().token
}
