use super::*;

// =============================================================
// format_currency
// =============================================================

#[test]
fn formats_with_symbol_and_two_decimals() {
    assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
    assert_eq!(format_currency(0.0, "USD"), "$0.00");
}

#[test]
fn negative_sign_precedes_the_symbol() {
    assert_eq!(format_currency(-1234.5, "USD"), "-$1,234.50");
}

#[test]
fn groups_thousands_and_millions() {
    assert_eq!(format_currency(1_000_000.0, "USD"), "$1,000,000.00");
    assert_eq!(format_currency(999.99, "USD"), "$999.99");
}

#[test]
fn known_currency_symbols() {
    assert_eq!(format_currency(10.0, "EUR"), "€10.00");
    assert_eq!(format_currency(10.0, "GBP"), "£10.00");
    assert_eq!(format_currency(10.0, "CAD"), "CA$10.00");
    assert_eq!(format_currency(10.0, "AUD"), "A$10.00");
}

#[test]
fn unknown_code_falls_back_to_prefix() {
    assert_eq!(format_currency(10.0, "JPY"), "JPY 10.00");
}

// =============================================================
// format_whole
// =============================================================

#[test]
fn whole_variant_drops_decimals() {
    assert_eq!(format_whole(5000.0, "USD"), "$5,000");
    assert_eq!(format_whole(5000.7, "USD"), "$5,001");
}

#[test]
fn whole_variant_keeps_sign() {
    assert_eq!(format_whole(-250.0, "USD"), "-$250");
}
