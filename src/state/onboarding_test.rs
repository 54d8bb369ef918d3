use super::*;

// =============================================================
// Step navigation
// =============================================================

#[test]
fn steps_advance_in_order() {
    assert_eq!(OnboardingStep::Welcome.next(), OnboardingStep::Income);
    assert_eq!(OnboardingStep::Income.next(), OnboardingStep::Budgets);
    assert_eq!(OnboardingStep::Budgets.next(), OnboardingStep::Done);
    assert_eq!(OnboardingStep::Done.next(), OnboardingStep::Done);
}

#[test]
fn back_never_goes_before_welcome() {
    assert_eq!(OnboardingStep::Welcome.back(), OnboardingStep::Welcome);
    assert_eq!(OnboardingStep::Budgets.back(), OnboardingStep::Income);
}

#[test]
fn indices_match_step_order() {
    assert_eq!(OnboardingStep::Welcome.index(), 0);
    assert_eq!(OnboardingStep::Done.index(), 3);
}

// =============================================================
// Income parsing and validation
// =============================================================

#[test]
fn blank_income_parses_to_zero() {
    let form = OnboardingForm::default();
    assert_eq!(form.monthly(), 0.0);
    assert!(!form.income_step_valid());
}

#[test]
fn income_parses_with_whitespace() {
    let form = OnboardingForm { monthly_income: " 5000 ".to_owned(), ..Default::default() };
    assert_eq!(form.monthly(), 5000.0);
    assert!(form.income_step_valid());
}

#[test]
fn annual_is_twelve_months() {
    let form = OnboardingForm { monthly_income: "4200".to_owned(), ..Default::default() };
    assert_eq!(form.annual(), 50400.0);
}

// =============================================================
// Budget limits
// =============================================================

#[test]
fn default_form_covers_all_budgetable_categories() {
    let form = OnboardingForm::default();
    assert_eq!(form.budgets.len(), Category::BUDGETABLE.len());
}

#[test]
fn blank_budgets_become_zero() {
    let mut form = OnboardingForm::default();
    form.budgets.insert(Category::Groceries, "350".to_owned());
    form.budgets.insert(Category::Food, "garbage".to_owned());

    let limits = form.budget_limits();
    assert_eq!(limits.get(&Category::Groceries), Some(&350.0));
    assert_eq!(limits.get(&Category::Food), Some(&0.0));
    assert_eq!(limits.get(&Category::Shopping), Some(&0.0));
}

// =============================================================
// Completion payload
// =============================================================

#[test]
fn completion_payload_marks_onboarding_complete() {
    let form = OnboardingForm { monthly_income: "5000".to_owned(), ..Default::default() };
    let payload = form.completion_payload();
    assert_eq!(payload["onboardingComplete"], serde_json::json!(true));
    assert_eq!(payload["income"]["monthly"], serde_json::json!(5000.0));
    assert_eq!(payload["income"]["annual"], serde_json::json!(60000.0));
    assert_eq!(payload["income"]["currency"], serde_json::json!("USD"));
}

#[test]
fn completion_payload_uses_wire_category_names() {
    let mut form = OnboardingForm { monthly_income: "5000".to_owned(), ..Default::default() };
    form.budgets.insert(Category::GasAndFuel, "120".to_owned());
    let payload = form.completion_payload();
    assert_eq!(payload["budgetLimits"]["gasAndFuel"], serde_json::json!(120.0));
}
