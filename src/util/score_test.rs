use super::*;

// =============================================================
// Rating buckets
// =============================================================

#[test]
fn rating_boundaries() {
    assert_eq!(rating(850), ScoreRating::Excellent);
    assert_eq!(rating(750), ScoreRating::Excellent);
    assert_eq!(rating(749), ScoreRating::Good);
    assert_eq!(rating(650), ScoreRating::Good);
    assert_eq!(rating(649), ScoreRating::Fair);
    assert_eq!(rating(550), ScoreRating::Fair);
    assert_eq!(rating(549), ScoreRating::Poor);
    assert_eq!(rating(300), ScoreRating::Poor);
}

// =============================================================
// Ring fraction
// =============================================================

#[test]
fn ring_fraction_spans_the_scale() {
    assert_eq!(ring_fraction(SCORE_MIN), 0.0);
    assert_eq!(ring_fraction(SCORE_MAX), 1.0);
    assert_eq!(ring_fraction(575), 0.5);
}

#[test]
fn ring_fraction_clamps_out_of_range_scores() {
    assert_eq!(ring_fraction(0), 0.0);
    assert_eq!(ring_fraction(2000), 1.0);
}

// =============================================================
// Savings rate
// =============================================================

#[test]
fn savings_rate_is_a_percentage_of_income() {
    assert_eq!(savings_rate(5000.0, 4000.0), 20.0);
}

#[test]
fn overspending_yields_a_negative_rate() {
    assert_eq!(savings_rate(1000.0, 1500.0), -50.0);
}

#[test]
fn zero_income_reports_zero() {
    assert_eq!(savings_rate(0.0, 500.0), 0.0);
    assert_eq!(savings_rate(-10.0, 500.0), 0.0);
}
