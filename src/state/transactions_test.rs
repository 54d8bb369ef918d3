use super::*;

fn tx(description: &str, notes: Option<&str>) -> Transaction {
    Transaction {
        id: "t1".to_owned(),
        date: "2026-08-01".to_owned(),
        description: description.to_owned(),
        amount: -10.0,
        kind: TxKind::Expense,
        category: Category::Others,
        notes: notes.map(str::to_owned),
    }
}

// =============================================================
// Query strings
// =============================================================

#[test]
fn base_query_has_month_year_page_limit() {
    let q = TransactionQuery::new(8, 2026);
    assert_eq!(q.query_string(), "?month=8&year=2026&page=1&limit=20");
}

#[test]
fn category_filter_uses_wire_name() {
    let mut q = TransactionQuery::new(8, 2026);
    q.category = Some(Category::GasAndFuel);
    assert!(q.query_string().ends_with("&category=gasAndFuel"));
}

#[test]
fn kind_filter_appends_type() {
    let mut q = TransactionQuery::new(8, 2026);
    q.kind = Some(TxKind::Income);
    assert!(q.query_string().ends_with("&type=income"));
}

#[test]
fn both_filters_appear_together() {
    let mut q = TransactionQuery::new(1, 2025);
    q.page = 3;
    q.category = Some(Category::Food);
    q.kind = Some(TxKind::Expense);
    assert_eq!(
        q.query_string(),
        "?month=1&year=2025&page=3&limit=20&category=food&type=expense"
    );
}

// =============================================================
// Page counting
// =============================================================

#[test]
fn page_count_rounds_up() {
    let q = TransactionQuery::new(8, 2026);
    assert_eq!(q.page_count(0), 1);
    assert_eq!(q.page_count(20), 1);
    assert_eq!(q.page_count(21), 2);
    assert_eq!(q.page_count(199), 10);
}

// =============================================================
// Client-side search
// =============================================================

#[test]
fn empty_needle_matches_everything() {
    assert!(matches_search(&tx("Coffee", None), ""));
    assert!(matches_search(&tx("Coffee", None), "   "));
}

#[test]
fn search_is_case_insensitive_on_description() {
    assert!(matches_search(&tx("Whole Foods Market", None), "whole foods"));
    assert!(!matches_search(&tx("Whole Foods Market", None), "target"));
}

#[test]
fn search_also_covers_notes() {
    assert!(matches_search(&tx("Transfer", Some("Rent for August")), "rent"));
    assert!(!matches_search(&tx("Transfer", None), "rent"));
}
