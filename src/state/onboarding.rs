//! Onboarding wizard state and the profile-update payload it produces.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use std::collections::BTreeMap;

use crate::net::types::Category;

/// The four wizard steps, in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnboardingStep {
    #[default]
    Welcome,
    Income,
    Budgets,
    Done,
}

impl OnboardingStep {
    pub fn next(self) -> OnboardingStep {
        match self {
            OnboardingStep::Welcome => OnboardingStep::Income,
            OnboardingStep::Income => OnboardingStep::Budgets,
            OnboardingStep::Budgets | OnboardingStep::Done => OnboardingStep::Done,
        }
    }

    pub fn back(self) -> OnboardingStep {
        match self {
            OnboardingStep::Welcome | OnboardingStep::Income => OnboardingStep::Welcome,
            OnboardingStep::Budgets => OnboardingStep::Income,
            OnboardingStep::Done => OnboardingStep::Budgets,
        }
    }

    pub fn index(self) -> usize {
        match self {
            OnboardingStep::Welcome => 0,
            OnboardingStep::Income => 1,
            OnboardingStep::Budgets => 2,
            OnboardingStep::Done => 3,
        }
    }
}

/// Raw wizard inputs. Amounts stay strings until submission so the form can
/// hold partial keystrokes; blanks parse to 0.
#[derive(Clone, Debug, PartialEq)]
pub struct OnboardingForm {
    pub monthly_income: String,
    pub currency: String,
    pub job_title: String,
    pub employer: String,
    pub budgets: BTreeMap<Category, String>,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        OnboardingForm {
            monthly_income: String::new(),
            currency: "USD".to_owned(),
            job_title: String::new(),
            employer: String::new(),
            budgets: Category::BUDGETABLE.iter().map(|c| (*c, String::new())).collect(),
        }
    }
}

impl OnboardingForm {
    pub fn monthly(&self) -> f64 {
        self.monthly_income.trim().parse().unwrap_or(0.0)
    }

    pub fn annual(&self) -> f64 {
        self.monthly() * 12.0
    }

    /// The income step requires a monthly amount before continuing.
    pub fn income_step_valid(&self) -> bool {
        self.monthly() > 0.0
    }

    /// Numeric budget limits; blank or unparsable entries become 0.
    pub fn budget_limits(&self) -> BTreeMap<Category, f64> {
        self.budgets
            .iter()
            .map(|(c, raw)| (*c, raw.trim().parse().unwrap_or(0.0)))
            .collect()
    }

    /// Body for `PUT /users/profile` completing onboarding. The response
    /// profile (with `onboardingComplete` confirmed by the server) replaces
    /// the session's profile wholesale.
    pub fn completion_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "income": {
                "monthly": self.monthly(),
                "annual": self.annual(),
                "currency": self.currency,
                "jobTitle": self.job_title,
                "employer": self.employer,
            },
            "budgetLimits": self.budget_limits(),
            "onboardingComplete": true,
        })
    }
}
