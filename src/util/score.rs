//! Financial/credit score display arithmetic.
//!
//! Scores are computed server-side on the 300-850 scale; everything here is
//! presentation only.

#[cfg(test)]
#[path = "score_test.rs"]
mod score_test;

pub const SCORE_MIN: u32 = 300;
pub const SCORE_MAX: u32 = 850;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreRating {
    pub fn label(self) -> &'static str {
        match self {
            ScoreRating::Excellent => "Excellent",
            ScoreRating::Good => "Good",
            ScoreRating::Fair => "Fair",
            ScoreRating::Poor => "Poor",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreRating::Excellent => "#10b981",
            ScoreRating::Good => "#4f8ef7",
            ScoreRating::Fair => "#f59e0b",
            ScoreRating::Poor => "#ef4444",
        }
    }
}

pub fn rating(score: u32) -> ScoreRating {
    if score >= 750 {
        ScoreRating::Excellent
    } else if score >= 650 {
        ScoreRating::Good
    } else if score >= 550 {
        ScoreRating::Fair
    } else {
        ScoreRating::Poor
    }
}

/// Filled fraction of the score ring, clamped to 0..=1.
pub fn ring_fraction(score: u32) -> f64 {
    let clamped = score.clamp(SCORE_MIN, SCORE_MAX);
    f64::from(clamped - SCORE_MIN) / f64::from(SCORE_MAX - SCORE_MIN)
}

/// Savings rate percentage; 0 when there is no income.
pub fn savings_rate(income: f64, expenses: f64) -> f64 {
    if income <= 0.0 {
        return 0.0;
    }
    (income - expenses) / income * 100.0
}
