//! Four-step onboarding wizard: welcome → income → budget limits → done.
//!
//! Completion issues the profile update and replaces the session profile
//! with the server's response; the route gate then lets the user into the
//! protected pages.

use leptos::prelude::*;

use crate::net::types::Category;
use crate::state::onboarding::{OnboardingForm, OnboardingStep};
use crate::state::session::SessionState;
use crate::state::ui::ToastState;
use crate::storage::ClientStore;
use crate::util::currency::format_whole;

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<ClientStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let step = RwSignal::new(OnboardingStep::Welcome);
    let form = RwSignal::new(OnboardingForm::default());
    let pending = RwSignal::new(false);

    let first_name = move || {
        session
            .get()
            .user
            .as_ref()
            .map_or_else(String::new, |u| u.first_name.clone())
    };

    let continue_from_income = move |_| {
        if form.get_untracked().income_step_valid() {
            step.update(|s| *s = s.next());
        } else {
            toasts.update(|t| t.error("Please enter your monthly income"));
        }
    };

    let complete = move |_| {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);

        #[cfg(feature = "hydrate")]
        wasm_bindgen_futures::spawn_local(async move {
            let payload = form.get_untracked().completion_payload();
            let Some(token) = super::bearer(&store) else {
                pending.set(false);
                return;
            };
            match crate::net::api::update_profile(&token, &payload).await {
                Ok(profile) => {
                    session.update(|s| {
                        crate::state::session::apply_profile_update(s, &store, profile);
                    });
                    toasts.update(|t| t.success("Profile setup complete! 🎉"));
                }
                Err(err) => super::handle_api_error(&err, session, store, toasts),
            }
            pending.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = store;
            pending.set(false);
        }
    };

    view! {
        <div class="onboarding-page">
            <div class="onboarding-card">
                <div class="step-indicator">
                    {(0..4_usize)
                        .map(|i| {
                            let dot_class = move || {
                                let current = step.get().index();
                                if i < current {
                                    "step-dot step-dot--done"
                                } else if i == current {
                                    "step-dot step-dot--active"
                                } else {
                                    "step-dot"
                                }
                            };
                            view! { <div class=dot_class></div> }
                        })
                        .collect::<Vec<_>>()}
                </div>

                {move || match step.get() {
                    OnboardingStep::Welcome => view! {
                        <div class="onboarding-step onboarding-step--center">
                            <div class="onboarding-step__emoji">"👋"</div>
                            <h2>{move || format!("Welcome, {}!", first_name())}</h2>
                            <p class="text-muted">
                                "Let's set up your financial profile in just a couple of steps. This helps Mana Karma give you personalized insights and recommendations."
                            </p>
                            <button
                                class="btn btn--primary"
                                on:click=move |_| step.update(|s| *s = s.next())
                            >
                                "Let's Get Started →"
                            </button>
                        </div>
                    }
                    .into_any(),
                    OnboardingStep::Income => view! {
                        <div class="onboarding-step">
                            <h2>"💰 Your Income"</h2>
                            <p class="text-muted">
                                "This helps us calculate your savings rate and give smart recommendations."
                            </p>

                            <div class="form-group">
                                <label class="form-label">"Monthly Income *"</label>
                                <input
                                    class="form-input"
                                    type="number"
                                    placeholder="e.g. 5000"
                                    prop:value=move || form.get().monthly_income
                                    on:input=move |ev| {
                                        form.update(|f| f.monthly_income = event_target_value(&ev));
                                    }
                                />
                                <Show when={move || form.get().monthly() > 0.0}>
                                    <span class="form-hint">
                                        {move || {
                                            let f = form.get();
                                            format!(
                                                "Annual: ~{}/year",
                                                format_whole(f.annual(), &f.currency),
                                            )
                                        }}
                                    </span>
                                </Show>
                            </div>

                            <div class="form-row">
                                <div class="form-group">
                                    <label class="form-label">"Job Title"</label>
                                    <input
                                        class="form-input"
                                        placeholder="e.g. Software Engineer"
                                        prop:value=move || form.get().job_title
                                        on:input=move |ev| {
                                            form.update(|f| f.job_title = event_target_value(&ev));
                                        }
                                    />
                                </div>
                                <div class="form-group">
                                    <label class="form-label">"Employer"</label>
                                    <input
                                        class="form-input"
                                        placeholder="e.g. Acme Corp"
                                        prop:value=move || form.get().employer
                                        on:input=move |ev| {
                                            form.update(|f| f.employer = event_target_value(&ev));
                                        }
                                    />
                                </div>
                            </div>

                            <div class="form-group">
                                <label class="form-label">"Currency"</label>
                                <select
                                    class="form-select"
                                    on:change=move |ev| {
                                        form.update(|f| f.currency = event_target_value(&ev));
                                    }
                                >
                                    <option value="USD">"USD — US Dollar"</option>
                                    <option value="EUR">"EUR — Euro"</option>
                                    <option value="GBP">"GBP — British Pound"</option>
                                    <option value="CAD">"CAD — Canadian Dollar"</option>
                                    <option value="AUD">"AUD — Australian Dollar"</option>
                                </select>
                            </div>

                            <div class="onboarding-step__actions">
                                <button
                                    class="btn btn--secondary"
                                    on:click=move |_| step.update(|s| *s = s.back())
                                >
                                    "← Back"
                                </button>
                                <button class="btn btn--primary" on:click=continue_from_income>
                                    "Continue →"
                                </button>
                            </div>
                        </div>
                    }
                    .into_any(),
                    OnboardingStep::Budgets => view! {
                        <div class="onboarding-step">
                            <h2>"📊 Budget Limits"</h2>
                            <p class="text-muted">
                                "Set monthly spending limits per category (optional). Leave blank to track without limits."
                            </p>

                            <div class="onboarding-step__budgets">
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
                                                        form.get().budgets.get(&category).cloned().unwrap_or_default()
                                                    }
                                                    on:input=move |ev| {
                                                        form.update(|f| {
                                                            f.budgets.insert(category, event_target_value(&ev));
                                                        });
                                                    }
                                                />
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>

                            <div class="onboarding-step__actions">
                                <button
                                    class="btn btn--secondary"
                                    on:click=move |_| step.update(|s| *s = s.back())
                                >
                                    "← Back"
                                </button>
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| step.update(|s| *s = s.next())
                                >
                                    "Continue →"
                                </button>
                            </div>
                        </div>
                    }
                    .into_any(),
                    OnboardingStep::Done => view! {
                        <div class="onboarding-step onboarding-step--center">
                            <div class="onboarding-step__emoji">"🎉"</div>
                            <h2>"You're All Set!"</h2>
                            <p class="text-muted">
                                "Your profile is configured. Start by uploading a bank statement to get your first AI-powered financial analysis."
                            </p>
                            <dl class="onboarding-step__summary">
                                <dt>"Monthly Income"</dt>
                                <dd>
                                    {move || {
                                        let f = form.get();
                                        format_whole(f.monthly(), &f.currency)
                                    }}
                                </dd>
                                <dt>"Savings Goal (20%)"</dt>
                                <dd>
                                    {move || {
                                        let f = form.get();
                                        format_whole(f.monthly() * 0.2, &f.currency)
                                    }}
                                </dd>
                            </dl>
                            <button class="btn btn--primary" disabled=pending on:click=complete>
                                {move || if pending.get() { "Saving..." } else { "🚀 Launch Dashboard" }}
                            </button>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
