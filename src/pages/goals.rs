//! Savings goals: local tracker with progress bars and quick contributions.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use uuid::Uuid;

use crate::state::goals::GoalsState;
use crate::state::session::SessionState;
use crate::state::ui::ToastState;
use crate::util::currency::format_whole;

#[component]
pub fn GoalsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let goals = RwSignal::new(GoalsState::default());
    let show_form = RwSignal::new(false);
    let title = RwSignal::new(String::new());
    let target = RwSignal::new(String::new());
    let starting = RwSignal::new(String::new());
    let deadline = RwSignal::new(String::new());
    let contribution = RwSignal::new(String::new());
    let contributing_to = RwSignal::new(None::<Uuid>);

    let currency = move || {
        session
            .get()
            .user
            .as_ref()
            .and_then(|u| u.income.as_ref())
            .and_then(|i| i.currency.clone())
            .unwrap_or_else(|| "USD".to_owned())
    };

    let add_goal = move |ev: SubmitEvent| {
        ev.prevent_default();
        let name = title.get_untracked().trim().to_owned();
        let Ok(target_amount) = target.get_untracked().trim().parse::<f64>() else {
            toasts.update(|t| t.error("Enter a target amount"));
            return;
        };
        if name.is_empty() || target_amount <= 0.0 {
            toasts.update(|t| t.error("A name and a positive target are required"));
            return;
        }
        let saved = starting.get_untracked().trim().parse::<f64>().unwrap_or(0.0);
        goals.update(|g| {
            g.add(name, target_amount, saved.max(0.0), deadline.get_untracked());
        });
        toasts.update(|t| t.success("Goal added 🎯"));
        title.set(String::new());
        target.set(String::new());
        starting.set(String::new());
        deadline.set(String::new());
        show_form.set(false);
    };

    let quick_add = move |id: Uuid, amount: f64| {
        goals.update(|g| g.contribute(id, amount));
    };

    let contribute = move |id: Uuid| {
        let Ok(amount) = contribution.get_untracked().trim().parse::<f64>() else {
            toasts.update(|t| t.error("Enter a contribution amount"));
            return;
        };
        if amount <= 0.0 {
            toasts.update(|t| t.error("Contributions must be positive"));
            return;
        }
        goals.update(|g| g.contribute(id, amount));
        contribution.set(String::new());
        contributing_to.set(None);
    };

    view! {
        <div class="page goals-page">
            <header class="page__header">
                <div>
                    <h1 class="page__title">"🎯 Savings Goals"</h1>
                    <p class="page__subtitle">"Track progress toward the things that matter"</p>
                </div>
                <button
                    class="btn btn--primary"
                    on:click=move |_| show_form.update(|v| *v = !*v)
                >
                    {move || if show_form.get() { "Cancel" } else { "+ New Goal" }}
                </button>
            </header>

            <Show when=move || show_form.get()>
                <section class="card">
                    <h3 class="card__title">"New Goal"</h3>
                    <form class="goal-form" on:submit=add_goal>
                        <div class="form-row">
                            <div class="form-group">
                                <label class="form-label">"Goal Name *"</label>
                                <input
                                    class="form-input"
                                    placeholder="e.g. Vacation Fund"
                                    prop:value=title
                                    on:input=move |ev| title.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label class="form-label">"Target Amount *"</label>
                                <input
                                    class="form-input"
                                    type="number"
                                    placeholder="e.g. 3000"
                                    prop:value=target
                                    on:input=move |ev| target.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label class="form-label">"Already Saved"</label>
                                <input
                                    class="form-input"
                                    type="number"
                                    placeholder="0"
                                    prop:value=starting
                                    on:input=move |ev| starting.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label class="form-label">"Target Date"</label>
                                <input
                                    class="form-input"
                                    type="date"
                                    prop:value=deadline
                                    on:input=move |ev| deadline.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <button type="submit" class="btn btn--primary">"Create Goal"</button>
                    </form>
                </section>
            </Show>

            {move || {
                let code = currency();
                let state = goals.get();
                if state.goals.is_empty() {
                    return view! {
                        <div class="card empty-state">
                            <p>"No goals yet. Create one to start saving with purpose."</p>
                        </div>
                    }
                    .into_any();
                }
                state
                    .goals
                    .into_iter()
                    .map(|goal| {
                        let id = goal.id;
                        let progress = goal.progress();
                        let done = goal.completed();
                        view! {
                            <div class="card goal-card">
                                <div class="goal-card__header">
                                    <h3 class="goal-card__title">
                                        {if done { "🏆 " } else { "🎯 " }}
                                        {goal.title}
                                    </h3>
                                    <span class="goal-card__deadline">
                                        {if goal.deadline.is_empty() {
                                            String::new()
                                        } else {
                                            format!("by {}", goal.deadline)
                                        }}
                                    </span>
                                </div>
                                <div class="goal-card__amounts">
                                    {format_whole(goal.current, &code)} " of "
                                    {format_whole(goal.target, &code)}
                                    " (" {format!("{progress:.0}")} "%)"
                                </div>
                                <div class="goal-card__track">
                                    <div
                                        class={if done {
                                            "goal-card__bar goal-card__bar--done"
                                        } else {
                                            "goal-card__bar"
                                        }}
                                        style=format!("width:{progress:.1}%")
                                    ></div>
                                </div>
                                <Show when=move || !done>
                                    {move || {
                                        if contributing_to.get() == Some(id) {
                                            view! {
                                                <div class="goal-card__contribute">
                                                    <input
                                                        class="form-input"
                                                        type="number"
                                                        placeholder="Amount"
                                                        prop:value=contribution
                                                        on:input=move |ev| {
                                                            contribution.set(event_target_value(&ev));
                                                        }
                                                    />
                                                    <button
                                                        class="btn btn--primary"
                                                        on:click=move |_| contribute(id)
                                                    >
                                                        "Add"
                                                    </button>
                                                    <button
                                                        class="btn btn--secondary"
                                                        on:click=move |_| contributing_to.set(None)
                                                    >
                                                        "Cancel"
                                                    </button>
                                                </div>
                                            }
                                            .into_any()
                                        } else {
                                            view! {
                                                <div class="goal-card__actions">
                                                    <button
                                                        class="btn btn--secondary"
                                                        on:click=move |_| quick_add(id, 100.0)
                                                    >
                                                        "+100"
                                                    </button>
                                                    <button
                                                        class="btn btn--secondary"
                                                        on:click=move |_| quick_add(id, 500.0)
                                                    >
                                                        "+500"
                                                    </button>
                                                    <button
                                                        class="btn btn--secondary"
                                                        on:click=move |_| contributing_to.set(Some(id))
                                                    >
                                                        "+ Custom"
                                                    </button>
                                                </div>
                                            }
                                            .into_any()
                                        }
                                    }}
                                </Show>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}
