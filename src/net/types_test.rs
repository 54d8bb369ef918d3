use super::*;

// =============================================================
// Profile wire format
// =============================================================

#[test]
fn profile_deserializes_mongo_id_alias() {
    let p: Profile = serde_json::from_str(
        r#"{"_id":"abc","firstName":"Ada","lastName":"Lovelace","email":"a@b.com"}"#,
    )
    .unwrap();
    assert_eq!(p.id, "abc");
    assert_eq!(p.first_name, "Ada");
}

#[test]
fn profile_onboarding_defaults_to_false() {
    let p: Profile = serde_json::from_str(
        r#"{"id":"abc","firstName":"Ada","lastName":"Lovelace","email":"a@b.com"}"#,
    )
    .unwrap();
    assert!(!p.onboarding_complete);
}

#[test]
fn profile_parses_nested_income() {
    let p: Profile = serde_json::from_str(
        r#"{
            "id": "abc",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "a@b.com",
            "onboardingComplete": true,
            "income": {"monthly": 5000, "currency": "USD", "jobTitle": "Engineer"}
        }"#,
    )
    .unwrap();
    assert!(p.onboarding_complete);
    let income = p.income.unwrap();
    assert_eq!(income.monthly, 5000.0);
    assert_eq!(income.currency.as_deref(), Some("USD"));
}

#[test]
fn initials_are_uppercased() {
    let p: Profile = serde_json::from_str(
        r#"{"id":"abc","firstName":"ada","lastName":"lovelace","email":"a@b.com"}"#,
    )
    .unwrap();
    assert_eq!(p.initials(), "AL");
}

// =============================================================
// Category and TxKind wire names
// =============================================================

#[test]
fn category_wire_names_are_camel_case() {
    assert_eq!(Category::GasAndFuel.as_str(), "gasAndFuel");
    assert_eq!(Category::HealthInsurance.as_str(), "healthInsurance");
    assert_eq!(
        serde_json::to_string(&Category::GasAndFuel).unwrap(),
        "\"gasAndFuel\""
    );
}

#[test]
fn every_category_round_trips_through_serde() {
    for category in Category::BUDGETABLE
        .into_iter()
        .chain([Category::Income, Category::Transfer])
    {
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, format!("\"{}\"", category.as_str()));
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, category);
    }
}

#[test]
fn budgetable_excludes_income_and_transfer() {
    assert!(!Category::BUDGETABLE.contains(&Category::Income));
    assert!(!Category::BUDGETABLE.contains(&Category::Transfer));
}

#[test]
fn tx_kind_is_lowercase_on_the_wire() {
    assert_eq!(serde_json::to_string(&TxKind::Income).unwrap(), "\"income\"");
    assert_eq!(serde_json::to_string(&TxKind::Expense).unwrap(), "\"expense\"");
}

// =============================================================
// Transaction
// =============================================================

#[test]
fn transaction_maps_the_type_field() {
    let tx: Transaction = serde_json::from_str(
        r#"{
            "_id": "t1",
            "date": "2026-08-01",
            "description": "Grocery run",
            "amount": -54.2,
            "type": "expense",
            "category": "groceries"
        }"#,
    )
    .unwrap();
    assert_eq!(tx.id, "t1");
    assert_eq!(tx.kind, TxKind::Expense);
    assert_eq!(tx.category, Category::Groceries);
}

#[test]
fn unknown_fields_default_sanely() {
    let tx: Transaction = serde_json::from_str(
        r#"{"id":"t1","date":"2026-08-01","description":"x","amount":1.0}"#,
    )
    .unwrap();
    assert_eq!(tx.kind, TxKind::Expense);
    assert_eq!(tx.category, Category::Others);
    assert!(tx.notes.is_none());
}

// =============================================================
// Insights
// =============================================================

#[test]
fn unknown_insight_kind_falls_back_to_other() {
    let insight: Insight = serde_json::from_str(
        r#"{"type":"brand_new_kind","title":"t","message":"m"}"#,
    )
    .unwrap();
    assert_eq!(insight.kind, InsightKind::Other);
}

#[test]
fn insight_response_tolerates_null_bundle() {
    let resp: InsightResponse = serde_json::from_str(r#"{"insight":null}"#).unwrap();
    assert!(resp.insight.is_none());
}

// =============================================================
// Statements and errors
// =============================================================

#[test]
fn statement_accepts_original_name_alias() {
    let s: Statement = serde_json::from_str(
        r#"{"_id":"s1","originalName":"aug.pdf","month":8,"year":2026,"status":"processed"}"#,
    )
    .unwrap();
    assert_eq!(s.file_name.as_deref(), Some("aug.pdf"));
    assert_eq!(s.status, StatementStatus::Processed);
}

#[test]
fn error_body_parses_field_errors() {
    let body: ApiErrorBody = serde_json::from_str(
        r#"{"message":"Validation failed","errors":{"email":"Already in use"}}"#,
    )
    .unwrap();
    assert_eq!(body.message.as_deref(), Some("Validation failed"));
    assert_eq!(
        body.errors.and_then(|e| e.get("email").cloned()).as_deref(),
        Some("Already in use")
    );
}
