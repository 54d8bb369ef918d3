//! Savings goals tracker.
//!
//! Goals live only in page-local state for now; there is no backend
//! endpoint for them yet.

#[cfg(test)]
#[path = "goals_test.rs"]
mod goals_test;

use uuid::Uuid;

/// One savings goal.
#[derive(Clone, Debug, PartialEq)]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    pub target: f64,
    pub current: f64,
    /// ISO date the user wants to hit the target by.
    pub deadline: String,
}

impl Goal {
    /// Progress percentage, clamped to 0..=100.
    pub fn progress(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.current / self.target * 100.0).clamp(0.0, 100.0)
    }

    pub fn completed(&self) -> bool {
        self.target > 0.0 && self.current >= self.target
    }
}

/// Page-local collection of goals.
#[derive(Clone, Debug, PartialEq)]
pub struct GoalsState {
    pub goals: Vec<Goal>,
}

impl Default for GoalsState {
    fn default() -> Self {
        // Seeded examples so the page demonstrates itself before the user
        // adds anything.
        GoalsState {
            goals: vec![
                Goal {
                    id: Uuid::new_v4(),
                    title: "Emergency Fund".to_owned(),
                    target: 5000.0,
                    current: 1500.0,
                    deadline: "2027-01-01".to_owned(),
                },
                Goal {
                    id: Uuid::new_v4(),
                    title: "New Car Downpayment".to_owned(),
                    target: 8000.0,
                    current: 8000.0,
                    deadline: "2026-05-01".to_owned(),
                },
            ],
        }
    }
}

impl GoalsState {
    pub fn empty() -> Self {
        GoalsState { goals: Vec::new() }
    }

    pub fn add(&mut self, title: String, target: f64, current: f64, deadline: String) -> Uuid {
        let id = Uuid::new_v4();
        self.goals.push(Goal { id, title, target, current, deadline });
        id
    }

    /// Add money toward a goal. Unknown ids are ignored.
    pub fn contribute(&mut self, id: Uuid, amount: f64) {
        if let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) {
            goal.current += amount;
        }
    }
}
