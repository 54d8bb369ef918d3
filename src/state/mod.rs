//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual pages can depend on small focused
//! models. Everything here is plain data with synchronous transitions; the
//! Leptos layer wraps these in `RwSignal`s provided via context, and all
//! session writes funnel through the operations in [`session`].

pub mod gate;
pub mod goals;
pub mod onboarding;
pub mod resolver;
pub mod session;
pub mod statements;
pub mod transactions;
pub mod ui;
