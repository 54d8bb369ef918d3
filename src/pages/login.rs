//! Login page: email/password form plus marketing panel.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::ui::ToastState;
use crate::storage::ClientStore;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<ClientStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let pending = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // At most one login in flight.
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if email_value.trim().is_empty() || password_value.is_empty() {
            form_error.set(Some("Email and password are required".to_owned()));
            return;
        }
        form_error.set(None);
        pending.set(true);
        let started = session.get_untracked().epoch();

        #[cfg(feature = "hydrate")]
        wasm_bindgen_futures::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(resp) => {
                    let mut applied = false;
                    session.update(|s| {
                        applied = crate::state::session::complete_auth(
                            s, &store, &resp.token, resp.user, started,
                        );
                    });
                    if applied {
                        toasts.update(|t| t.success("Welcome back! 👋"));
                    }
                }
                // Failed logins leave the prior session untouched.
                Err(err) => form_error.set(Some(err.user_message())),
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
            <div class="auth-page__branding">
                <div class="auth-page__logo">
                    <span class="auth-page__logo-mark">"💸"</span>
                    <span class="auth-page__logo-text">"Mana Karma"</span>
                </div>
                <h1 class="auth-page__headline">"Your Money, Smarter."</h1>
                <p class="auth-page__sub">
                    "Analyze spending, track budgets, and get AI-powered financial guidance — all in one dashboard."
                </p>
                <ul class="auth-page__features">
                    <li>"📊 Smart analytics on every statement you upload"</li>
                    <li>"🔒 Bank-level security for your data"</li>
                    <li>"💡 Personalized tips to grow your savings"</li>
                </ul>
            </div>

            <div class="auth-page__panel">
                <h2 class="auth-form__title">"Welcome Back"</h2>
                <p class="auth-form__sub">"Sign in to your Mana Karma account"</p>

                <form class="auth-form" on:submit=submit>
                    <div class="form-group">
                        <label class="form-label" for="login-email">"Email Address"</label>
                        <input
                            id="login-email"
                            type="email"
                            class="form-input"
                            placeholder="you@example.com"
                            autocomplete="email"
                            prop:value=email
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label class="form-label" for="login-password">"Password"</label>
                        <div class="form-input-wrap">
                            <input
                                id="login-password"
                                type=move || if show_password.get() { "text" } else { "password" }
                                class="form-input"
                                placeholder="••••••••"
                                autocomplete="current-password"
                                prop:value=password
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="form-input-suffix"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "🙈" } else { "👁" }}
                            </button>
                        </div>
                    </div>

                    <Show when=move || form_error.get().is_some()>
                        <p class="form-error">{move || form_error.get().unwrap_or_default()}</p>
                    </Show>

                    <button type="submit" class="btn btn--primary" disabled=pending>
                        {move || if pending.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>

                <div class="auth-form__divider">"or"</div>

                <button
                    class="auth-form__demo"
                    on:click=move |_| {
                        email.set("demo@manakarma.com".to_owned());
                        password.set("demo123456".to_owned());
                    }
                >
                    "🎯 Try Demo Account — demo@manakarma.com / demo123456"
                </button>

                <p class="auth-form__switch">
                    "Don't have an account? "
                    <a href="/register">"Create one free"</a>
                </p>
            </div>
        </div>
    }
}
