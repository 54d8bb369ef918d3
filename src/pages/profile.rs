//! Profile settings: personal details, income, budget limits, and password.
//!
//! Every save round-trips through the profile endpoint and the session
//! adopts the server's returned profile wholesale.

use std::collections::BTreeMap;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::net::types::Category;
use crate::state::session::SessionState;
use crate::state::ui::ToastState;
use crate::storage::ClientStore;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<ClientStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let snapshot = session.get_untracked().user;
    let initial = snapshot.as_ref();

    let first_name = RwSignal::new(initial.map(|u| u.first_name.clone()).unwrap_or_default());
    let last_name = RwSignal::new(initial.map(|u| u.last_name.clone()).unwrap_or_default());
    let email = initial.map(|u| u.email.clone()).unwrap_or_default();
    let monthly_income = RwSignal::new(
        initial
            .and_then(|u| u.income.as_ref())
            .map(|i| format!("{:.0}", i.monthly))
            .unwrap_or_default(),
    );
    let currency = RwSignal::new(
        initial
            .and_then(|u| u.income.as_ref())
            .and_then(|i| i.currency.clone())
            .unwrap_or_else(|| "USD".to_owned()),
    );
    let job_title = RwSignal::new(
        initial
            .and_then(|u| u.income.as_ref())
            .and_then(|i| i.job_title.clone())
            .unwrap_or_default(),
    );
    let employer = RwSignal::new(
        initial
            .and_then(|u| u.income.as_ref())
            .and_then(|i| i.employer.clone())
            .unwrap_or_default(),
    );
    let savings_goal = RwSignal::new(
        initial
            .and_then(|u| u.savings_goal)
            .map(|g| format!("{g:.0}"))
            .unwrap_or_default(),
    );
    let budgets = RwSignal::new(
        initial
            .and_then(|u| u.budget_limits.clone())
            .unwrap_or_default()
            .into_iter()
            .map(|(category, limit)| (category, format!("{limit:.0}")))
            .collect::<BTreeMap<Category, String>>(),
    );

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let saving = RwSignal::new(false);
    let changing = RwSignal::new(false);

    let save_profile = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        if first_name.get_untracked().trim().is_empty()
            || last_name.get_untracked().trim().is_empty()
        {
            toasts.update(|t| t.error("First and last name are required"));
            return;
        }
        saving.set(true);

        #[cfg(feature = "hydrate")]
        wasm_bindgen_futures::spawn_local(async move {
            let monthly = monthly_income.get_untracked().trim().parse::<f64>().unwrap_or(0.0);
            let goal = savings_goal.get_untracked().trim().parse::<f64>().ok();
            let limits: BTreeMap<&str, f64> = budgets
                .get_untracked()
                .iter()
                .map(|(category, value)| {
                    (category.as_str(), value.trim().parse::<f64>().unwrap_or(0.0))
                })
                .collect();
            let payload = serde_json::json!({
                "firstName": first_name.get_untracked().trim(),
                "lastName": last_name.get_untracked().trim(),
                "income": {
                    "monthly": monthly,
                    "annual": monthly * 12.0,
                    "currency": currency.get_untracked(),
                    "jobTitle": job_title.get_untracked().trim(),
                    "employer": employer.get_untracked().trim(),
                },
                "budgetLimits": limits,
                "savingsGoal": goal,
            });

            let Some(token) = super::bearer(&store) else {
                saving.set(false);
                return;
            };
            match crate::net::api::update_profile(&token, &payload).await {
                Ok(profile) => {
                    session.update(|s| {
                        crate::state::session::apply_profile_update(s, &store, profile);
                    });
                    toasts.update(|t| t.success("Profile saved"));
                }
                Err(err) => super::handle_api_error(&err, session, store, toasts),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = store;
            saving.set(false);
        }
    };

    let save_password = move |ev: SubmitEvent| {
        ev.prevent_default();
        if changing.get_untracked() {
            return;
        }
        let new = new_password.get_untracked();
        if new.len() < 6 {
            toasts.update(|t| t.error("New password must be at least 6 characters"));
            return;
        }
        if new != confirm_password.get_untracked() {
            toasts.update(|t| t.error("New passwords do not match"));
            return;
        }
        changing.set(true);

        #[cfg(feature = "hydrate")]
        wasm_bindgen_futures::spawn_local(async move {
            let Some(token) = super::bearer(&store) else {
                changing.set(false);
                return;
            };
            let result = crate::net::api::change_password(
                &token,
                &current_password.get_untracked(),
                &new_password.get_untracked(),
            )
            .await;
            match result {
                Ok(()) => {
                    toasts.update(|t| t.success("Password changed 🔒"));
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(err) => super::handle_api_error(&err, session, store, toasts),
            }
            changing.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        changing.set(false);
    };

    view! {
        <div class="page profile-page">
            <header class="page__header">
                <div>
                    <h1 class="page__title">"Profile & Settings"</h1>
                    <p class="page__subtitle">{format!("Signed in as {email}")}</p>
                </div>
            </header>

            <section class="card">
                <h3 class="card__title">"👤 Personal & Financial Details"</h3>
                <form class="profile-form" on:submit=save_profile>
                    <div class="form-row">
                        <div class="form-group">
                            <label class="form-label">"First Name"</label>
                            <input
                                class="form-input"
                                prop:value=first_name
                                on:input=move |ev| first_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Last Name"</label>
                            <input
                                class="form-input"
                                prop:value=last_name
                                on:input=move |ev| last_name.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label class="form-label">"Monthly Income"</label>
                            <input
                                class="form-input"
                                type="number"
                                prop:value=monthly_income
                                on:input=move |ev| monthly_income.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Currency"</label>
                            <select
                                class="form-select"
                                on:change=move |ev| currency.set(event_target_value(&ev))
                            >
                                {["USD", "EUR", "GBP", "CAD", "AUD"]
                                    .into_iter()
                                    .map(|code| {
                                        view! {
                                            <option
                                                value=code
                                                selected=move || currency.get() == code
                                            >
                                                {code}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label class="form-label">"Job Title"</label>
                            <input
                                class="form-input"
                                prop:value=job_title
                                on:input=move |ev| job_title.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Employer"</label>
                            <input
                                class="form-input"
                                prop:value=employer
                                on:input=move |ev| employer.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label class="form-label">"Monthly Savings Goal"</label>
                        <input
                            class="form-input"
                            type="number"
                            placeholder="e.g. 1000"
                            prop:value=savings_goal
                            on:input=move |ev| savings_goal.set(event_target_value(&ev))
                        />
                    </div>

                    <h4 class="profile-form__section">"Budget Limits"</h4>
                    <div class="profile-form__budgets">
                        {Category::BUDGETABLE
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <div class="form-group">
                                        <label class="form-label">
                                            {category.icon()} " " {category.label()}
                                        </label>
                                        <input
                                            class="form-input"
                                            type="number"
                                            placeholder="No limit"
                                            prop:value=move || {
                                                budgets
                                                    .get()
                                                    .get(&category)
                                                    .cloned()
                                                    .unwrap_or_default()
                                            }
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                budgets.update(|b| {
                                                    b.insert(category, value);
                                                });
                                            }
                                        />
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <button type="submit" class="btn btn--primary" disabled=saving>
                        {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </section>

            <section class="card">
                <h3 class="card__title">"🔒 Change Password"</h3>
                <form class="profile-form" on:submit=save_password>
                    <div class="form-group">
                        <label class="form-label">"Current Password"</label>
                        <input
                            class="form-input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=current_password
                            on:input=move |ev| current_password.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label class="form-label">"New Password"</label>
                            <input
                                class="form-input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=new_password
                                on:input=move |ev| new_password.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Confirm New Password"</label>
                            <input
                                class="form-input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=confirm_password
                                on:input=move |ev| confirm_password.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <button type="submit" class="btn btn--primary" disabled=changing>
                        {move || if changing.get() { "Changing..." } else { "Change Password" }}
                    </button>
                </form>
            </section>
        </div>
    }
}
