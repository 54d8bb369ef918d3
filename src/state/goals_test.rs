use super::*;

fn goal(target: f64, current: f64) -> Goal {
    Goal {
        id: Uuid::new_v4(),
        title: "Test".to_owned(),
        target,
        current,
        deadline: String::new(),
    }
}

// =============================================================
// Progress
// =============================================================

#[test]
fn progress_is_a_percentage() {
    assert_eq!(goal(1000.0, 250.0).progress(), 25.0);
}

#[test]
fn progress_clamps_at_one_hundred() {
    assert_eq!(goal(1000.0, 1500.0).progress(), 100.0);
}

#[test]
fn zero_target_reports_zero_progress() {
    assert_eq!(goal(0.0, 500.0).progress(), 0.0);
}

#[test]
fn completed_requires_reaching_the_target() {
    assert!(goal(1000.0, 1000.0).completed());
    assert!(!goal(1000.0, 999.99).completed());
    assert!(!goal(0.0, 0.0).completed());
}

// =============================================================
// GoalsState
// =============================================================

#[test]
fn default_state_seeds_example_goals() {
    assert_eq!(GoalsState::default().goals.len(), 2);
}

#[test]
fn add_appends_and_returns_the_id() {
    let mut state = GoalsState::empty();
    let id = state.add("Vacation".to_owned(), 3000.0, 100.0, "2027-06-01".to_owned());
    assert_eq!(state.goals.len(), 1);
    assert_eq!(state.goals[0].id, id);
    assert_eq!(state.goals[0].current, 100.0);
}

#[test]
fn contribute_adds_to_the_matching_goal() {
    let mut state = GoalsState::empty();
    let id = state.add("Vacation".to_owned(), 3000.0, 100.0, String::new());
    state.contribute(id, 250.0);
    assert_eq!(state.goals[0].current, 350.0);
}

#[test]
fn contribute_to_unknown_id_is_ignored() {
    let mut state = GoalsState::empty();
    state.add("Vacation".to_owned(), 3000.0, 100.0, String::new());
    state.contribute(Uuid::new_v4(), 250.0);
    assert_eq!(state.goals[0].current, 100.0);
}
