//! Full-viewport loading screen shown while the initial session resolution
//! is outstanding.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__logo">"💸"</div>
            <div class="loading-screen__row">
                <div class="spinner"></div>
                <span>"Loading Mana Karma..."</span>
            </div>
        </div>
    }
}
