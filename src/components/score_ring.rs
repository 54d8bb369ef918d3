//! SVG ring for financial and credit scores (300-850 scale).

use leptos::prelude::*;

use crate::util::score::{rating, ring_fraction};

const RADIUS: f64 = 54.0;

/// Donut ring with the score in the middle and its rating underneath.
#[component]
pub fn ScoreRing(score: u32, title: &'static str) -> impl IntoView {
    let circumference = 2.0 * std::f64::consts::PI * RADIUS;
    let offset = circumference * (1.0 - ring_fraction(score));
    let score_rating = rating(score);

    view! {
        <div class="score-ring">
            <svg width="140" height="140" viewBox="0 0 140 140">
                <circle
                    cx="70"
                    cy="70"
                    r=RADIUS
                    fill="none"
                    stroke="rgba(255,255,255,0.06)"
                    stroke-width="12"
                ></circle>
                <circle
                    cx="70"
                    cy="70"
                    r=RADIUS
                    fill="none"
                    stroke=score_rating.color()
                    stroke-width="12"
                    stroke-linecap="round"
                    stroke-dasharray=format!("{circumference:.2}")
                    stroke-dashoffset=format!("{offset:.2}")
                    transform="rotate(-90 70 70)"
                ></circle>
                <text x="70" y="68" text-anchor="middle" class="score-ring__value">
                    {score}
                </text>
                <text x="70" y="86" text-anchor="middle" class="score-ring__title">
                    {title}
                </text>
            </svg>
            <span class="score-ring__rating">{score_rating.label()}</span>
        </div>
    }
}
