//! Dashboard: monthly overview with stat cards, spending breakdown,
//! income/expense trend, insight preview, and recent transactions.
//!
//! All figures come from the backend summary/insight endpoints; everything
//! computed here is display-only arithmetic (percentages, bar widths).

use leptos::prelude::*;

use crate::components::score_ring::ScoreRing;
use crate::net::types::{Category, InsightBundle, Summary, Transaction, TxKind};
use crate::state::session::SessionState;
use crate::state::ui::ToastState;
use crate::storage::ClientStore;
use crate::util::currency::{format_currency, format_whole};
use crate::util::dates::{MONTHS, current_month_year, month_name};
use crate::util::score::savings_rate;

#[derive(Clone, Debug, Default, PartialEq)]
struct DashboardData {
    summary: Summary,
    insights: Option<InsightBundle>,
    recent: Vec<Transaction>,
}

async fn load_dashboard(
    month: u32,
    year: i32,
    session: RwSignal<SessionState>,
    store: ClientStore,
    toasts: RwSignal<ToastState>,
) -> DashboardData {
    let Some(token) = super::bearer(&store) else {
        return DashboardData::default();
    };

    let mut data = DashboardData::default();
    match crate::net::api::fetch_summary(&token, month, year).await {
        Ok(summary) => data.summary = summary,
        Err(err) => {
            super::handle_api_error(&err, session, store, toasts);
            return data;
        }
    }
    match crate::net::api::fetch_insights(&token, month, year).await {
        Ok(insights) => data.insights = insights,
        Err(err) => super::handle_api_error(&err, session, store, toasts),
    }
    match crate::net::api::fetch_recent_transactions(&token, month, year, 5).await {
        Ok(recent) => data.recent = recent,
        Err(err) => super::handle_api_error(&err, session, store, toasts),
    }
    data
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<ClientStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let (now_month, now_year) = current_month_year();
    let month = RwSignal::new(now_month);
    let year = RwSignal::new(now_year);

    let data = LocalResource::new(move || {
        load_dashboard(month.get(), year.get(), session, store, toasts)
    });

    let currency = move || {
        session
            .get()
            .user
            .as_ref()
            .and_then(|u| u.income.as_ref())
            .and_then(|i| i.currency.clone())
            .unwrap_or_else(|| "USD".to_owned())
    };
    let fallback_income = move || {
        session
            .get()
            .user
            .as_ref()
            .and_then(|u| u.income.as_ref())
            .map_or(0.0, |i| i.monthly)
    };
    let greeting_name = move || {
        session
            .get()
            .user
            .as_ref()
            .map_or_else(String::new, |u| u.first_name.clone())
    };
    let credit_score = move || session.get().user.as_ref().and_then(|u| u.credit_score);

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <div>
                    <h1 class="page__title">
                        {move || format!("Welcome back, {}! 👋", greeting_name())}
                    </h1>
                    <p class="page__subtitle">
                        {move || format!("{} {} Financial Overview", month_name(month.get()), year.get())}
                    </p>
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
                </div>
            </header>

            <Suspense fallback=move || view! { <p class="page__loading">"Loading overview..."</p> }>
                {move || {
                    data.get()
                        .map(|d| {
                            let code = currency();
                            let income = if d.summary.total_income > 0.0 {
                                d.summary.total_income
                            } else {
                                fallback_income()
                            };
                            let expenses = d.summary.total_expenses;
                            let savings = income - expenses;
                            let rate = savings_rate(income, expenses);
                            let score = d
                                .insights
                                .as_ref()
                                .and_then(|i| i.score_data.as_ref())
                                .map_or(0, |s| s.financial_score);
                            let health = d
                                .insights
                                .as_ref()
                                .and_then(|i| i.score_data.as_ref())
                                .and_then(|s| s.spending_health.clone())
                                .unwrap_or_else(|| "N/A".to_owned());
                            let top_insights: Vec<_> = d
                                .insights
                                .as_ref()
                                .map(|i| i.insights.iter().take(3).cloned().collect())
                                .unwrap_or_default();

                            view! {
                                <div class="stat-grid">
                                    <StatCard
                                        label="Monthly Income"
                                        value=format_whole(income, &code)
                                        hint="💵".to_owned()
                                    />
                                    <StatCard
                                        label="Total Expenses"
                                        value=format_whole(expenses, &code)
                                        hint={if income > 0.0 {
                                            format!("{:.1}% of income", expenses / income * 100.0)
                                        } else {
                                            "No income set".to_owned()
                                        }}
                                    />
                                    <StatCard
                                        label="Net Savings"
                                        value=format_whole(savings, &code)
                                        hint=format!("{rate:.1}% savings rate")
                                    />
                                    <StatCard
                                        label="Financial Score"
                                        value={if score > 0 { score.to_string() } else { "—".to_owned() }}
                                        hint=format!("{health} spending health")
                                    />
                                </div>

                                <div class="card-grid">
                                    <section class="card">
                                        <h3 class="card__title">"Spending Breakdown"</h3>
                                        <BreakdownBars summary=d.summary.clone() code=code.clone()/>
                                    </section>

                                    <section class="card">
                                        <h3 class="card__title">"Income vs Expenses"</h3>
                                        <TrendRows summary=d.summary.clone() code=code.clone()/>
                                    </section>
                                </div>

                                <div class="card-grid">
                                    <section class="card">
                                        <div class="card__header">
                                            <h3 class="card__title">"💡 AI Insights"</h3>
                                            <a class="btn btn--ghost" href="/insights">
                                                "View All →"
                                            </a>
                                        </div>
                                        {if top_insights.is_empty() {
                                            view! {
                                                <p class="empty-state">
                                                    "AI insights generate automatically after uploading a statement."
                                                </p>
                                            }
                                                .into_any()
                                        } else {
                                            top_insights
                                                .into_iter()
                                                .map(|insight| {
                                                    view! {
                                                        <div class="insight-card">
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
                                                .collect::<Vec<_>>()
                                                .into_any()
                                        }}
                                        <div class="score-ring-row">
                                            <Show when={move || score > 0}>
                                                <ScoreRing score=score title="Health"/>
                                            </Show>
                                            {move || {
                                                credit_score()
                                                    .filter(|c| *c > 0)
                                                    .map(|c| view! { <ScoreRing score=c title="Credit"/> })
                                            }}
                                        </div>
                                    </section>

                                    <section class="card">
                                        <div class="card__header">
                                            <h3 class="card__title">"Recent Transactions"</h3>
                                            <a class="btn btn--ghost" href="/transactions">
                                                "View All →"
                                            </a>
                                        </div>
                                        <RecentList transactions=d.recent.clone() code=code.clone()/>
                                    </section>
                                </div>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: String, hint: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{value}</div>
            <div class="stat-card__hint">{hint}</div>
        </div>
    }
}

/// Horizontal bars per expense category, widest = biggest spend.
#[component]
fn BreakdownBars(summary: Summary, code: String) -> impl IntoView {
    let entries: Vec<_> = summary
        .category_breakdown
        .iter()
        .filter(|c| c.category != Category::Income && c.total > 0.0)
        .cloned()
        .collect();
    let max = entries.iter().map(|c| c.total).fold(0.0_f64, f64::max);

    if entries.is_empty() {
        return view! {
            <p class="empty-state">"Upload your bank statement to see spending categories."</p>
        }
        .into_any();
    }

    entries
        .into_iter()
        .map(|entry| {
            let width = if max > 0.0 { entry.total / max * 100.0 } else { 0.0 };
            view! {
                <div class="breakdown-row">
                    <span class="breakdown-row__label">
                        {entry.category.icon()} " " {entry.category.label()}
                    </span>
                    <div class="breakdown-row__track">
                        <div
                            class="breakdown-row__bar"
                            style=format!(
                                "width:{width:.1}%;background:{}",
                                entry.category.color(),
                            )
                        ></div>
                    </div>
                    <span class="breakdown-row__amount">
                        {format_currency(entry.total, &code)}
                    </span>
                </div>
            }
        })
        .collect::<Vec<_>>()
        .into_any()
}

/// Six-month trend as paired income/expense bars.
#[component]
fn TrendRows(summary: Summary, code: String) -> impl IntoView {
    let max = summary
        .monthly_trend
        .iter()
        .map(|p| p.income.max(p.expenses))
        .fold(0.0_f64, f64::max);

    if summary.monthly_trend.is_empty() {
        return view! {
            <p class="empty-state">"Upload a statement to see your spending trends over time."</p>
        }
        .into_any();
    }

    summary
        .monthly_trend
        .into_iter()
        .map(|point| {
            let income_w = if max > 0.0 { point.income / max * 100.0 } else { 0.0 };
            let expense_w = if max > 0.0 { point.expenses / max * 100.0 } else { 0.0 };
            let title = format!(
                "{}: {} in, {} out",
                point.label,
                format_whole(point.income, &code),
                format_whole(point.expenses, &code),
            );
            view! {
                <div class="trend-row" title=title>
                    <span class="trend-row__label">{point.label}</span>
                    <div class="trend-row__bars">
                        <div class="trend-row__bar trend-row__bar--income" style=format!("width:{income_w:.1}%")></div>
                        <div class="trend-row__bar trend-row__bar--expense" style=format!("width:{expense_w:.1}%")></div>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>()
        .into_any()
}

#[component]
fn RecentList(transactions: Vec<Transaction>, code: String) -> impl IntoView {
    if transactions.is_empty() {
        return view! {
            <p class="empty-state">"Upload a statement or add transactions manually."</p>
        }
        .into_any();
    }

    transactions
        .into_iter()
        .map(|tx| {
            let signed = match tx.kind {
                TxKind::Income => format!("+{}", format_currency(tx.amount.abs(), &code)),
                TxKind::Expense => format!("-{}", format_currency(tx.amount.abs(), &code)),
            };
            let amount_class = match tx.kind {
                TxKind::Income => "tx-row__amount tx-row__amount--income",
                TxKind::Expense => "tx-row__amount tx-row__amount--expense",
            };
            view! {
                <div class="tx-row">
                    <span class="tx-row__icon">{tx.category.icon()}</span>
                    <div class="tx-row__body">
                        <div class="tx-row__description">{tx.description}</div>
                        <div class="tx-row__meta">
                            {tx.date} " • " {tx.category.label()}
                        </div>
                    </div>
                    <span class=amount_class>{signed}</span>
                </div>
            }
        })
        .collect::<Vec<_>>()
        .into_any()
}
