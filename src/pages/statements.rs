//! Statements: upload bank statements (PDF/CSV) and manage past uploads.
//!
//! Files are validated locally before upload; parsing and categorization
//! happen server-side, with the row status reflecting processing progress.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use crate::net::types::{Statement, StatementStatus};
use crate::state::session::SessionState;
use crate::state::statements::{accept_file, format_file_size};
use crate::state::ui::ToastState;
use crate::storage::ClientStore;
use crate::util::dates::{MONTHS, current_month_year, month_name};

async fn load_statements(
    session: RwSignal<SessionState>,
    store: ClientStore,
    toasts: RwSignal<ToastState>,
) -> Vec<Statement> {
    let Some(token) = super::bearer(&store) else {
        return Vec::new();
    };
    match crate::net::api::fetch_statements(&token).await {
        Ok(statements) => statements,
        Err(err) => {
            super::handle_api_error(&err, session, store, toasts);
            Vec::new()
        }
    }
}

fn status_class(status: StatementStatus) -> &'static str {
    match status {
        StatementStatus::Pending => "status-pill status-pill--pending",
        StatementStatus::Processing => "status-pill status-pill--processing",
        StatementStatus::Processed => "status-pill status-pill--processed",
        StatementStatus::Failed => "status-pill status-pill--failed",
    }
}

#[component]
pub fn StatementsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<ClientStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let (now_month, now_year) = current_month_year();
    let month = RwSignal::new(now_month);
    let year = RwSignal::new(now_year);
    let bank_name = RwSignal::new(String::new());
    let account_type = RwSignal::new("checking".to_owned());
    let selected_name = RwSignal::new(None::<String>);
    let selected_size = RwSignal::new(0_u64);
    let pending = RwSignal::new(false);
    let reload = RwSignal::new(0_u32);

    let file_input = NodeRef::<html::Input>::new();

    let statements = LocalResource::new(move || {
        reload.track();
        load_statements(session, store, toasts)
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let file = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                selected_name.set(Some(file.name()));
                selected_size.set(file.size() as u64);
            } else {
                selected_name.set(None);
                selected_size.set(0);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let upload = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let Some(name) = selected_name.get_untracked() else {
            toasts.update(|t| t.error("Choose a statement file first"));
            return;
        };
        if let Err(rejection) = accept_file(&name, selected_size.get_untracked()) {
            toasts.update(|t| t.error(rejection.message()));
            return;
        }
        pending.set(true);

        #[cfg(feature = "hydrate")]
        wasm_bindgen_futures::spawn_local(async move {
            use crate::state::statements::UploadMeta;

            let file = file_input
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let (Some(file), Some(token)) = (file, super::bearer(&store)) else {
                pending.set(false);
                return;
            };
            let meta = UploadMeta {
                month: month.get_untracked(),
                year: year.get_untracked(),
                bank_name: bank_name.get_untracked(),
                account_type: account_type.get_untracked(),
            };
            match crate::net::api::upload_statement(&token, &file, &meta).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Statement uploaded! Analysis will be ready shortly. 📊");
                    });
                    selected_name.set(None);
                    selected_size.set(0);
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                    reload.update(|n| *n += 1);
                }
                Err(err) => super::handle_api_error(&err, session, store, toasts),
            }
            pending.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        pending.set(false);
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
            match crate::net::api::delete_statement(&token, &id).await {
                Ok(()) => {
                    toasts.update(|t| t.success("Statement and its transactions deleted"));
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
        <div class="page statements-page">
            <header class="page__header">
                <div>
                    <h1 class="page__title">"Bank Statements"</h1>
                    <p class="page__subtitle">
                        "Upload a statement and we'll extract and categorize every transaction"
                    </p>
                </div>
            </header>

            <section class="card upload-card">
                <h3 class="card__title">"📤 Upload Statement"</h3>
                <form class="upload-form" on:submit=upload>
                    <label class="upload-drop">
                        <input
                            node_ref=file_input
                            type="file"
                            accept=".pdf,.csv"
                            class="upload-drop__input"
                            on:change=on_file_change
                        />
                        {move || match selected_name.get() {
                            Some(name) => view! {
                                <span class="upload-drop__file">
                                    "📄 " {name} " ("
                                    {format_file_size(Some(selected_size.get()))} ")"
                                </span>
                            }
                            .into_any(),
                            None => view! {
                                <span class="upload-drop__hint">
                                    "Click to choose a PDF or CSV statement (max 10 MB)"
                                </span>
                            }
                            .into_any(),
                        }}
                    </label>

                    <div class="form-row">
                        <div class="form-group">
                            <label class="form-label">"Statement Month"</label>
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
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Year"</label>
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
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label class="form-label">"Bank Name"</label>
                            <input
                                class="form-input"
                                placeholder="e.g. Chase"
                                prop:value=bank_name
                                on:input=move |ev| bank_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Account Type"</label>
                            <select
                                class="form-select"
                                on:change=move |ev| account_type.set(event_target_value(&ev))
                            >
                                <option value="checking">"Checking"</option>
                                <option value="savings">"Savings"</option>
                                <option value="credit">"Credit Card"</option>
                            </select>
                        </div>
                    </div>

                    <button type="submit" class="btn btn--primary" disabled=pending>
                        {move || if pending.get() { "Uploading..." } else { "Upload & Analyze" }}
                    </button>
                </form>
            </section>

            <section class="card">
                <h3 class="card__title">"Upload History"</h3>
                <Suspense fallback=move || view! { <p class="page__loading">"Loading statements..."</p> }>
                    {move || {
                        statements
                            .get()
                            .map(|rows| {
                                if rows.is_empty() {
                                    return view! {
                                        <p class="empty-state">
                                            "No statements yet. Upload your first one above to unlock AI insights."
                                        </p>
                                    }
                                    .into_any();
                                }
                                rows.into_iter()
                                    .map(|statement| {
                                        let delete_id = statement.id.clone();
                                        view! {
                                            <div class="statement-row">
                                                <span class="statement-row__icon">"📄"</span>
                                                <div class="statement-row__body">
                                                    <div class="statement-row__name">
                                                        {statement
                                                            .file_name
                                                            .clone()
                                                            .unwrap_or_else(|| "Statement".to_owned())}
                                                    </div>
                                                    <div class="statement-row__meta">
                                                        {month_name(statement.month)} " " {statement.year}
                                                        {statement
                                                            .bank_name
                                                            .clone()
                                                            .map(|b| format!(" • {b}"))
                                                            .unwrap_or_default()}
                                                        " • " {format_file_size(statement.file_size)}
                                                        {statement
                                                            .transaction_count
                                                            .map(|n| format!(" • {n} transactions"))
                                                            .unwrap_or_default()}
                                                    </div>
                                                </div>
                                                <span class=status_class(
                                                    statement.status,
                                                )>{statement.status.label()}</span>
                                                <button
                                                    class="btn btn--icon"
                                                    title="Delete statement and its transactions"
                                                    on:click=move |_| delete(delete_id.clone())
                                                >
                                                    "🗑️"
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
