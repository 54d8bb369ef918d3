//! AI insights: generated analysis cards, health/credit score rings, and
//! investment suggestions for a selected month.

use leptos::prelude::*;

use crate::components::score_ring::ScoreRing;
use crate::net::types::InsightBundle;
use crate::state::session::SessionState;
use crate::state::ui::ToastState;
use crate::storage::ClientStore;
use crate::util::dates::{MONTHS, current_month_year};

async fn load_insights(
    month: u32,
    year: i32,
    session: RwSignal<SessionState>,
    store: ClientStore,
    toasts: RwSignal<ToastState>,
) -> Option<InsightBundle> {
    let token = super::bearer(&store)?;
    match crate::net::api::fetch_insights(&token, month, year).await {
        Ok(bundle) => bundle,
        Err(err) => {
            super::handle_api_error(&err, session, store, toasts);
            None
        }
    }
}

#[component]
pub fn InsightsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<ClientStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let (now_month, now_year) = current_month_year();
    let month = RwSignal::new(now_month);
    let year = RwSignal::new(now_year);
    let refreshing = RwSignal::new(false);
    let reload = RwSignal::new(0_u32);

    let data = LocalResource::new(move || {
        reload.track();
        load_insights(month.get(), year.get(), session, store, toasts)
    });

    let credit_score = move || session.get().user.as_ref().and_then(|u| u.credit_score);

    let refresh = move |_| {
        if refreshing.get_untracked() {
            return;
        }
        refreshing.set(true);

        #[cfg(feature = "hydrate")]
        wasm_bindgen_futures::spawn_local(async move {
            let Some(token) = super::bearer(&store) else {
                refreshing.set(false);
                return;
            };
            let result = crate::net::api::refresh_insights(
                &token,
                month.get_untracked(),
                year.get_untracked(),
            )
            .await;
            match result {
                Ok(_) => {
                    toasts.update(|t| t.success("Insights regenerated ✨"));
                    reload.update(|n| *n += 1);
                }
                Err(err) => super::handle_api_error(&err, session, store, toasts),
            }
            refreshing.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        refreshing.set(false);
    };

    view! {
        <div class="page insights-page">
            <header class="page__header">
                <div>
                    <h1 class="page__title">"💡 AI Insights"</h1>
                    <p class="page__subtitle">"Personalized analysis of your spending patterns"</p>
                </div>
                <div class="page__header-controls">
                    <select
                        class="form-select"
                        on:change=move |ev| {
                            if let Ok(m) = event_target_value(&ev).parse() {
                                month.set(m);
                            }
                        }
                    >
                        {MONTHS
                            .iter()
                            .enumerate()
                            .map(|(i, name)| {
                                let value = u32::try_from(i).unwrap_or_default() + 1;
                                view! {
                                    <option value=value selected=move || month.get() == value>
                                        {*name}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        class="form-select"
                        on:change=move |ev| {
                            if let Ok(y) = event_target_value(&ev).parse() {
                                year.set(y);
                            }
                        }
                    >
                        <option value=now_year>{now_year}</option>
                        <option value={now_year - 1}>{now_year - 1}</option>
                    </select>
                    <button class="btn btn--secondary" disabled=refreshing on:click=refresh>
                        {move || if refreshing.get() { "Regenerating..." } else { "🔄 Regenerate" }}
                    </button>
                </div>
            </header>

            <Suspense fallback=move || view! { <p class="page__loading">"Analyzing your finances..."</p> }>
                {move || {
                    data.get()
                        .map(|bundle| match bundle {
                            None => view! {
                                <div class="card empty-state empty-state--tall">
                                    <div class="empty-state__emoji">"🤖"</div>
                                    <h3>"No insights for this month yet"</h3>
                                    <p class="text-muted">
                                        "Upload a bank statement for this period and the AI analysis will appear here."
                                    </p>
                                    <a class="btn btn--primary" href="/statements">
                                        "Upload a Statement"
                                    </a>
                                </div>
                            }
                            .into_any(),
                            Some(bundle) => {
                                let score = bundle
                                    .score_data
                                    .as_ref()
                                    .map_or(0, |s| s.financial_score);
                                let health = bundle
                                    .score_data
                                    .as_ref()
                                    .and_then(|s| s.spending_health.clone());
                                let cards = bundle.insights.clone();
                                let suggestions = bundle.investment_suggestions.clone();
                                let has_suggestions = !suggestions.is_empty();

                                view! {
                                    <div class="score-ring-row score-ring-row--wide">
                                        <Show when={move || score > 0}>
                                            <ScoreRing score=score title="Financial Health"/>
                                        </Show>
                                        {move || {
                                            credit_score()
                                                .filter(|c| *c > 0)
                                                .map(|c| {
                                                    view! { <ScoreRing score=c title="Credit Score"/> }
                                                })
                                        }}
                                        {health
                                            .map(|h| {
                                                view! {
                                                    <div class="health-chip">
                                                        "Spending health: " <strong>{h}</strong>
                                                    </div>
                                                }
                                            })}
                                    </div>

                                    <div class="insight-grid">
                                        {cards
                                            .into_iter()
                                            .map(|insight| {
                                                view! {
                                                    <div class="insight-card insight-card--full">
                                                        <span class="insight-card__icon">
                                                            {insight.kind.icon()}
                                                        </span>
                                                        <div>
                                                            <div class="insight-card__title">
                                                                {insight.title}
                                                            </div>
                                                            <div class="insight-card__message">
                                                                {insight.message}
                                                            </div>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>

                                    <Show when=move || has_suggestions>
                                        <section class="card">
                                            <h3 class="card__title">"💹 Investment Suggestions"</h3>
                                            <ul class="suggestion-list">
                                                {suggestions
                                                    .iter()
                                                    .cloned()
                                                    .map(|s| view! { <li>{s}</li> })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        </section>
                                    </Show>
                                }
                                .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
