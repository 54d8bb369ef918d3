//! Two-step registration: account details, then a review step.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::ui::ToastState;
use crate::storage::ClientStore;

fn validate(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Option<&'static str> {
    if first_name.trim().is_empty() || last_name.trim().is_empty() {
        return Some("First and last name are required");
    }
    let at = email.find('@');
    let dot_after_at = at.map(|i| email[i..].contains('.'));
    if at.is_none() || dot_after_at != Some(true) {
        return Some("A valid email is required");
    }
    if password.len() < 6 {
        return Some("Password must be at least 6 characters");
    }
    if password != confirm {
        return Some("Passwords do not match");
    }
    None
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<ClientStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let review = RwSignal::new(false);
    let pending = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let to_review = move |ev: SubmitEvent| {
        ev.prevent_default();
        let result = validate(
            &first_name.get_untracked(),
            &last_name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        );
        match result {
            Some(msg) => form_error.set(Some(msg.to_owned())),
            None => {
                form_error.set(None);
                review.set(true);
            }
        }
    };

    let submit = move |_| {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        let started = session.get_untracked().epoch();

        #[cfg(feature = "hydrate")]
        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::net::api::register(
                &first_name.get_untracked(),
                &last_name.get_untracked(),
                &email.get_untracked(),
                &password.get_untracked(),
            )
            .await;
            match result {
                Ok(resp) => {
                    // Fresh accounts always arrive with onboarding incomplete;
                    // the gate sends them to the wizard.
                    let mut applied = false;
                    session.update(|s| {
                        applied = crate::state::session::complete_auth(
                            s, &store, &resp.token, resp.user, started,
                        );
                    });
                    if applied {
                        toasts.update(|t| t.success("Account created! 🎉"));
                    }
                }
                Err(err) => {
                    form_error.set(Some(err.user_message()));
                    review.set(false);
                }
            }
            pending.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (store, started, toasts);
            pending.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__panel auth-page__panel--center">
                <h2 class="auth-form__title">"Create Your Account"</h2>
                <p class="auth-form__sub">"Free forever. No credit card required."</p>

                <Show
                    when=move || !review.get()
                    fallback=move || {
                        view! {
                            <div class="auth-form">
                                <h3 class="auth-form__review-title">"Almost there!"</h3>
                                <dl class="auth-form__review">
                                    <dt>"Name"</dt>
                                    <dd>{move || format!("{} {}", first_name.get(), last_name.get())}</dd>
                                    <dt>"Email"</dt>
                                    <dd>{email}</dd>
                                </dl>
                                <div class="auth-form__actions">
                                    <button class="btn btn--secondary" on:click=move |_| review.set(false)>
                                        "← Back"
                                    </button>
                                    <button class="btn btn--primary" disabled=pending on:click=submit>
                                        {move || if pending.get() { "Creating..." } else { "Create Account" }}
                                    </button>
                                </div>
                            </div>
                        }
                    }
                >
                    <form class="auth-form" on:submit=to_review>
                        <div class="form-row">
                            <div class="form-group">
                                <label class="form-label" for="reg-fname">"First Name"</label>
                                <input
                                    id="reg-fname"
                                    class="form-input"
                                    placeholder="John"
                                    prop:value=first_name
                                    on:input=move |ev| first_name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label class="form-label" for="reg-lname">"Last Name"</label>
                                <input
                                    id="reg-lname"
                                    class="form-input"
                                    placeholder="Doe"
                                    prop:value=last_name
                                    on:input=move |ev| last_name.set(event_target_value(&ev))
                                />
                            </div>
                        </div>

                        <div class="form-group">
                            <label class="form-label" for="reg-email">"Email Address"</label>
                            <input
                                id="reg-email"
                                type="email"
                                class="form-input"
                                placeholder="you@example.com"
                                prop:value=email
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label class="form-label" for="reg-pw">"Password"</label>
                            <input
                                id="reg-pw"
                                type="password"
                                class="form-input"
                                placeholder="Min. 6 characters"
                                prop:value=password
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label class="form-label" for="reg-cpw">"Confirm Password"</label>
                            <input
                                id="reg-cpw"
                                type="password"
                                class="form-input"
                                placeholder="Re-enter password"
                                prop:value=confirm
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </div>

                        <Show when=move || form_error.get().is_some()>
                            <p class="form-error">{move || form_error.get().unwrap_or_default()}</p>
                        </Show>

                        <button type="submit" class="btn btn--primary">"Continue →"</button>
                    </form>
                </Show>

                <p class="auth-form__switch">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
