//! Route authorization gate.
//!
//! A pure decision function re-evaluated on every navigation and session
//! change. The full contract:
//!
//! | loading | profile | onboarded | Protected         | Onboarding        | Public            |
//! |---------|---------|-----------|-------------------|-------------------|-------------------|
//! | true    | —       | —         | Loading           | Loading           | Loading           |
//! | false   | absent  | —         | RedirectLogin     | RedirectLogin     | Render            |
//! | false   | present | false     | RedirectOnboarding| Render            | RedirectOnboarding|
//! | false   | present | true      | Render            | RedirectDashboard | RedirectDashboard |
//!
//! Unknown routes fall back to the dashboard, which re-enters through the
//! Protected rule.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use super::session::SessionState;

/// Classification of a navigable view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteCategory {
    /// Dashboard, transactions, statements, insights, profile, goals.
    Protected,
    /// The onboarding wizard, only for signed-in users who haven't finished it.
    Onboarding,
    /// Login and register, only for signed-out visitors.
    Public,
}

/// What the router should do for a (session, category) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    /// Initial resolution still outstanding; show the loading screen and make
    /// no access decision yet.
    Loading,
    RedirectLogin,
    RedirectOnboarding,
    RedirectDashboard,
}

pub fn authorize(session: &SessionState, category: RouteCategory) -> GateDecision {
    if session.loading {
        return GateDecision::Loading;
    }
    match (&session.user, category) {
        (None, RouteCategory::Public) => GateDecision::Render,
        (None, _) => GateDecision::RedirectLogin,
        (Some(user), RouteCategory::Protected) => {
            if user.onboarding_complete {
                GateDecision::Render
            } else {
                GateDecision::RedirectOnboarding
            }
        }
        (Some(user), RouteCategory::Onboarding) => {
            if user.onboarding_complete {
                GateDecision::RedirectDashboard
            } else {
                GateDecision::Render
            }
        }
        (Some(user), RouteCategory::Public) => {
            if user.onboarding_complete {
                GateDecision::RedirectDashboard
            } else {
                GateDecision::RedirectOnboarding
            }
        }
    }
}
