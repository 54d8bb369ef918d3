//! Transactions: filterable, paginated listing with manual add/edit/delete.
//!
//! Month, year, category, and type filters go to the server; the free-text
//! search narrows the current page client-side.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::net::types::{Category, Transaction, TransactionInput, TransactionPage, TxKind};
use crate::state::session::SessionState;
use crate::state::transactions::{TransactionQuery, matches_search};
use crate::state::ui::ToastState;
use crate::storage::ClientStore;
use crate::util::currency::format_currency;
use crate::util::dates::{MONTHS, current_month_year};

/// Editable form fields for the add/edit modal.
#[derive(Clone, Debug, PartialEq)]
struct TxForm {
    id: Option<String>,
    date: String,
    description: String,
    amount: String,
    kind: TxKind,
    category: Category,
    notes: String,
}

impl TxForm {
    fn blank() -> Self {
        TxForm {
            id: None,
            date: String::new(),
            description: String::new(),
            amount: String::new(),
            kind: TxKind::Expense,
            category: Category::Others,
            notes: String::new(),
        }
    }

    fn from_transaction(tx: &Transaction) -> Self {
        TxForm {
            id: Some(tx.id.clone()),
            date: tx.date.clone(),
            description: tx.description.clone(),
            amount: format!("{:.2}", tx.amount.abs()),
            kind: tx.kind,
            category: tx.category,
            notes: tx.notes.clone().unwrap_or_default(),
        }
    }

    /// Wire body, or `None` while required fields are missing. Expenses are
    /// sent with a negative amount, matching the backend convention.
    fn input(&self) -> Option<TransactionInput> {
        let amount = self.amount.trim().parse::<f64>().ok().filter(|a| *a > 0.0)?;
        if self.date.is_empty() || self.description.trim().is_empty() {
            return None;
        }
        let signed = match self.kind {
            TxKind::Income => amount,
            TxKind::Expense => -amount,
        };
        Some(TransactionInput {
            date: self.date.clone(),
            description: self.description.trim().to_owned(),
            amount: signed,
            kind: self.kind,
            category: self.category,
            notes: Some(self.notes.trim().to_owned()).filter(|n| !n.is_empty()),
        })
    }
}

async fn load_page(
    query: TransactionQuery,
    session: RwSignal<SessionState>,
    store: ClientStore,
    toasts: RwSignal<ToastState>,
) -> TransactionPage {
    let Some(token) = super::bearer(&store) else {
        return TransactionPage::default();
    };
    match crate::net::api::fetch_transactions(&token, &query).await {
        Ok(page) => page,
        Err(err) => {
            super::handle_api_error(&err, session, store, toasts);
            TransactionPage::default()
        }
    }
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<ClientStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let (now_month, now_year) = current_month_year();
    let month = RwSignal::new(now_month);
    let year = RwSignal::new(now_year);
    let page = RwSignal::new(1_u32);
    let category = RwSignal::new(None::<Category>);
    let kind = RwSignal::new(None::<TxKind>);
    let search = RwSignal::new(String::new());

    // Bumped after every mutation so the resource refetches.
    let reload = RwSignal::new(0_u32);

    let form = RwSignal::new(None::<TxForm>);
    let pending = RwSignal::new(false);

    let query = move || {
        let mut q = TransactionQuery::new(month.get(), year.get());
        q.page = page.get();
        q.category = category.get();
        q.kind = kind.get();
        q
    };

    let data = LocalResource::new(move || {
        reload.track();
        load_page(query(), session, store, toasts)
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

    let save = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let Some(state) = form.get_untracked() else {
            return;
        };
        let Some(input) = state.input() else {
            toasts.update(|t| t.error("Date, description, and a positive amount are required"));
            return;
        };
        pending.set(true);

        #[cfg(feature = "hydrate")]
        wasm_bindgen_futures::spawn_local(async move {
            let Some(token) = super::bearer(&store) else {
                pending.set(false);
                return;
            };
            let result = match &state.id {
                Some(id) => crate::net::api::update_transaction(&token, id, &input)
                    .await
                    .map(|_| "Transaction updated"),
                None => crate::net::api::create_transaction(&token, &input)
                    .await
                    .map(|_| "Transaction added"),
            };
            match result {
                Ok(msg) => {
                    toasts.update(|t| t.success(msg));
                    form.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(err) => super::handle_api_error(&err, session, store, toasts),
            }
            pending.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
            pending.set(false);
        }
    };

    let delete = move |id: String| {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);

        #[cfg(feature = "hydrate")]
        wasm_bindgen_futures::spawn_local(async move {
            let Some(token) = super::bearer(&store) else {
                pending.set(false);
                return;
            };
            match crate::net::api::delete_transaction(&token, &id).await {
                Ok(()) => {
                    toasts.update(|t| t.success("Transaction deleted"));
                    reload.update(|n| *n += 1);
                }
                Err(err) => super::handle_api_error(&err, session, store, toasts),
            }
            pending.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            pending.set(false);
        }
    };

    view! {
        <div class="page transactions-page">
            <header class="page__header">
                <div>
                    <h1 class="page__title">"Transactions"</h1>
                    <p class="page__subtitle">"Every transaction, categorized and searchable"</p>
                </div>
                <button
                    class="btn btn--primary"
                    on:click=move |_| form.set(Some(TxForm::blank()))
                >
                    "+ Add Transaction"
                </button>
            </header>

            <div class="filter-bar">
                <select
                    class="form-select"
                    on:change=move |ev| {
                        if let Ok(m) = event_target_value(&ev).parse() {
                            month.set(m);
                            page.set(1);
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
                            page.set(1);
                        }
                    }
                >
                    <option value=now_year>{now_year}</option>
                    <option value={now_year - 1}>{now_year - 1}</option>
                </select>
                <select
                    class="form-select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        category.set(
                            Category::BUDGETABLE
                                .into_iter()
                                .chain([Category::Income, Category::Transfer])
                                .find(|c| c.as_str() == value),
                        );
                        page.set(1);
                    }
                >
                    <option value="">"All Categories"</option>
                    {Category::BUDGETABLE
                        .into_iter()
                        .chain([Category::Income, Category::Transfer])
                        .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="form-select"
                    on:change=move |ev| {
                        kind.set(match event_target_value(&ev).as_str() {
                            "income" => Some(TxKind::Income),
                            "expense" => Some(TxKind::Expense),
                            _ => None,
                        });
                        page.set(1);
                    }
                >
                    <option value="">"All Types"</option>
                    <option value="income">"Income"</option>
                    <option value="expense">"Expense"</option>
                </select>
                <input
                    class="form-input filter-bar__search"
                    placeholder="🔍 Search description or notes..."
                    prop:value=search
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>

            <Suspense fallback=move || view! { <p class="page__loading">"Loading transactions..."</p> }>
                {move || {
                    data.get()
                        .map(|loaded| {
                            let code = currency();
                            let needle = search.get();
                            let visible: Vec<_> = loaded
                                .transactions
                                .iter()
                                .filter(|tx| matches_search(tx, &needle))
                                .cloned()
                                .collect();
                            let pages = query().page_count(loaded.total);

                            view! {
                                {if visible.is_empty() {
                                    view! {
                                        <div class="card empty-state">
                                            <p>"No transactions found for this period."</p>
                                            <p class="text-muted">
                                                "Try a different month, or add one manually."
                                            </p>
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="card tx-table">
                                            {visible
                                                .into_iter()
                                                .map(|tx| {
                                                    let edit_tx = tx.clone();
                                                    let delete_id = tx.id.clone();
                                                    let signed = match tx.kind {
                                                        TxKind::Income => {
                                                            format!("+{}", format_currency(tx.amount.abs(), &code))
                                                        }
                                                        TxKind::Expense => {
                                                            format!("-{}", format_currency(tx.amount.abs(), &code))
                                                        }
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
                                                                    {tx.notes
                                                                        .map(|n| format!(" • {n}"))
                                                                        .unwrap_or_default()}
                                                                </div>
                                                            </div>
                                                            <span class=amount_class>{signed}</span>
                                                            <div class="tx-row__actions">
                                                                <button
                                                                    class="btn btn--icon"
                                                                    title="Edit"
                                                                    on:click=move |_| {
                                                                        form.set(Some(TxForm::from_transaction(&edit_tx)));
                                                                    }
                                                                >
                                                                    "✏️"
                                                                </button>
                                                                <button
                                                                    class="btn btn--icon"
                                                                    title="Delete"
                                                                    on:click=move |_| delete(delete_id.clone())
                                                                >
                                                                    "🗑️"
                                                                </button>
                                                            </div>
                                                        </div>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }}

                                <Show when={move || pages > 1}>
                                    <div class="pagination">
                                        <button
                                            class="btn btn--secondary"
                                            disabled=move || page.get() <= 1
                                            on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                                        >
                                            "← Prev"
                                        </button>
                                        <span class="pagination__label">
                                            {move || format!("Page {} of {pages}", page.get())}
                                        </span>
                                        <button
                                            class="btn btn--secondary"
                                            disabled=move || page.get() >= pages
                                            on:click=move |_| page.update(|p| *p = (*p + 1).min(pages))
                                        >
                                            "Next →"
                                        </button>
                                    </div>
                                </Show>
                            }
                        })
                }}
            </Suspense>

            <Show when=move || form.get().is_some()>
                <div class="modal-backdrop" on:click=move |_| form.set(None)>
                    <div class="modal" on:click=move |ev| ev.stop_propagation()>
                        <h3 class="modal__title">
                            {move || {
                                if form.get().is_some_and(|f| f.id.is_some()) {
                                    "Edit Transaction"
                                } else {
                                    "Add Transaction"
                                }
                            }}
                        </h3>
                        <form class="modal__form" on:submit=save>
                            <div class="form-row">
                                <div class="form-group">
                                    <label class="form-label">"Date *"</label>
                                    <input
                                        class="form-input"
                                        type="date"
                                        prop:value=move || {
                                            form.get().map(|f| f.date).unwrap_or_default()
                                        }
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| {
                                                if let Some(f) = f.as_mut() {
                                                    f.date = value;
                                                }
                                            });
                                        }
                                    />
                                </div>
                                <div class="form-group">
                                    <label class="form-label">"Amount *"</label>
                                    <input
                                        class="form-input"
                                        type="number"
                                        step="0.01"
                                        placeholder="0.00"
                                        prop:value=move || {
                                            form.get().map(|f| f.amount).unwrap_or_default()
                                        }
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| {
                                                if let Some(f) = f.as_mut() {
                                                    f.amount = value;
                                                }
                                            });
                                        }
                                    />
                                </div>
                            </div>

                            <div class="form-group">
                                <label class="form-label">"Description *"</label>
                                <input
                                    class="form-input"
                                    placeholder="e.g. Weekly groceries"
                                    prop:value=move || {
                                        form.get().map(|f| f.description).unwrap_or_default()
                                    }
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| {
                                            if let Some(f) = f.as_mut() {
                                                f.description = value;
                                            }
                                        });
                                    }
                                />
                            </div>

                            <div class="form-row">
                                <div class="form-group">
                                    <label class="form-label">"Type"</label>
                                    <select
                                        class="form-select"
                                        on:change=move |ev| {
                                            let picked = match event_target_value(&ev).as_str() {
                                                "income" => TxKind::Income,
                                                _ => TxKind::Expense,
                                            };
                                            form.update(|f| {
                                                if let Some(f) = f.as_mut() {
                                                    f.kind = picked;
                                                }
                                            });
                                        }
                                    >
                                        <option
                                            value="expense"
                                            selected=move || {
                                                form.get().is_some_and(|f| f.kind == TxKind::Expense)
                                            }
                                        >
                                            "Expense"
                                        </option>
                                        <option
                                            value="income"
                                            selected=move || {
                                                form.get().is_some_and(|f| f.kind == TxKind::Income)
                                            }
                                        >
                                            "Income"
                                        </option>
                                    </select>
                                </div>
                                <div class="form-group">
                                    <label class="form-label">"Category"</label>
                                    <select
                                        class="form-select"
                                        on:change=move |ev| {
                                            let value = event_target_value(&ev);
                                            let picked = Category::BUDGETABLE
                                                .into_iter()
                                                .chain([Category::Income, Category::Transfer])
                                                .find(|c| c.as_str() == value)
                                                .unwrap_or_default();
                                            form.update(|f| {
                                                if let Some(f) = f.as_mut() {
                                                    f.category = picked;
                                                }
                                            });
                                        }
                                    >
                                        {Category::BUDGETABLE
                                            .into_iter()
                                            .chain([Category::Income, Category::Transfer])
                                            .map(|c| {
                                                view! {
                                                    <option
                                                        value=c.as_str()
                                                        selected=move || {
                                                            form.get().is_some_and(|f| f.category == c)
                                                        }
                                                    >
                                                        {c.label()}
                                                    </option>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </div>
                            </div>

                            <div class="form-group">
                                <label class="form-label">"Notes"</label>
                                <input
                                    class="form-input"
                                    placeholder="Optional"
                                    prop:value=move || {
                                        form.get().map(|f| f.notes).unwrap_or_default()
                                    }
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| {
                                            if let Some(f) = f.as_mut() {
                                                f.notes = value;
                                            }
                                        });
                                    }
                                />
                            </div>

                            <div class="modal__actions">
                                <button
                                    type="button"
                                    class="btn btn--secondary"
                                    on:click=move |_| form.set(None)
                                >
                                    "Cancel"
                                </button>
                                <button type="submit" class="btn btn--primary" disabled=pending>
                                    {move || if pending.get() { "Saving..." } else { "Save" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </div>
    }
}
