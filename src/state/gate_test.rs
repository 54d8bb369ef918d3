use super::*;
use crate::net::types::Profile;

fn profile(onboarded: bool) -> Profile {
    Profile {
        id: "u1".to_owned(),
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

fn resolved(user: Option<Profile>) -> SessionState {
    let mut state = SessionState::default();
    match user {
        Some(p) => {
            let epoch = state.epoch();
            state.apply_profile(p, epoch);
        }
        None => state.resolve_unauthenticated(),
    }
    state
}

// =============================================================
// Loading: no access decision for any category
// =============================================================

#[test]
fn loading_always_defers() {
    let state = SessionState::default();
    for category in [RouteCategory::Protected, RouteCategory::Onboarding, RouteCategory::Public] {
        assert_eq!(authorize(&state, category), GateDecision::Loading);
    }
}

#[test]
fn loading_defers_even_with_hydrated_profile() {
    let mut state = SessionState::default();
    state.hydrate(Some(profile(true)));
    assert_eq!(authorize(&state, RouteCategory::Protected), GateDecision::Loading);
}

// =============================================================
// Unauthenticated
// =============================================================

#[test]
fn anonymous_renders_public() {
    let state = resolved(None);
    assert_eq!(authorize(&state, RouteCategory::Public), GateDecision::Render);
}

#[test]
fn anonymous_is_sent_to_login_from_protected() {
    let state = resolved(None);
    assert_eq!(authorize(&state, RouteCategory::Protected), GateDecision::RedirectLogin);
}

#[test]
fn anonymous_is_sent_to_login_from_onboarding() {
    let state = resolved(None);
    assert_eq!(authorize(&state, RouteCategory::Onboarding), GateDecision::RedirectLogin);
}

// =============================================================
// Signed in, onboarding incomplete
// =============================================================

#[test]
fn unonboarded_user_renders_onboarding() {
    let state = resolved(Some(profile(false)));
    assert_eq!(authorize(&state, RouteCategory::Onboarding), GateDecision::Render);
}

#[test]
fn unonboarded_user_cannot_enter_protected() {
    let state = resolved(Some(profile(false)));
    assert_eq!(
        authorize(&state, RouteCategory::Protected),
        GateDecision::RedirectOnboarding
    );
}

#[test]
fn unonboarded_user_cannot_revisit_public() {
    let state = resolved(Some(profile(false)));
    assert_eq!(authorize(&state, RouteCategory::Public), GateDecision::RedirectOnboarding);
}

// =============================================================
// Signed in, onboarding complete
// =============================================================

#[test]
fn onboarded_user_renders_protected() {
    let state = resolved(Some(profile(true)));
    assert_eq!(authorize(&state, RouteCategory::Protected), GateDecision::Render);
}

#[test]
fn onboarded_user_cannot_reenter_onboarding() {
    let state = resolved(Some(profile(true)));
    assert_eq!(
        authorize(&state, RouteCategory::Onboarding),
        GateDecision::RedirectDashboard
    );
}

#[test]
fn onboarded_user_cannot_revisit_public() {
    let state = resolved(Some(profile(true)));
    assert_eq!(authorize(&state, RouteCategory::Public), GateDecision::RedirectDashboard);
}
