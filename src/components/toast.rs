//! Single-slot toast host rendered at the top right of the viewport.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, ToastState};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <Show when=move || toasts.get().current.is_some()>
            {move || {
                toasts
                    .get()
                    .current
                    .map(|(kind, message)| {
                        let class = match kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        let icon = match kind {
                            ToastKind::Success => "✓",
                            ToastKind::Error => "✕",
                        };
                        view! {
                            <div class=class role="status">
                                <span class="toast__icon">{icon}</span>
                                <span class="toast__message">{message}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(ToastState::dismiss)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
