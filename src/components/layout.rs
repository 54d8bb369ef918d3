//! App shell for protected pages: sidebar navigation, topbar, content outlet.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{self, SessionState};
use crate::state::ui::ShellState;
use crate::storage::ClientStore;
use crate::util::currency::format_whole;

const NAV_ITEMS: [(&str, &str, &str); 6] = [
    ("/dashboard", "Dashboard", "📊"),
    ("/transactions", "Transactions", "↔️"),
    ("/statements", "Statements", "📄"),
    ("/insights", "AI Insights", "💡"),
    ("/goals", "Goals", "🎯"),
    ("/profile", "Profile", "👤"),
];

fn page_title(path: &str) -> &'static str {
    NAV_ITEMS
        .iter()
        .find(|(p, _, _)| *p == path)
        .map_or("Dashboard", |(_, label, _)| label)
}

#[component]
pub fn AppLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<ClientStore>();
    let shell = RwSignal::new(ShellState::default());
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let sign_out = {
        let navigate = navigate.clone();
        move |_| {
            session.update(|s| session::sign_out(s, &store));
            navigate("/login", NavigateOptions::default());
        }
    };

    let initials = move || {
        session
            .get()
            .user
            .as_ref()
            .map_or_else(|| "U".to_owned(), crate::net::types::Profile::initials)
    };
    let full_name = move || {
        session.get().user.as_ref().map_or_else(String::new, |u| {
            format!("{} {}", u.first_name, u.last_name)
        })
    };
    let email = move || session.get().user.as_ref().map_or_else(String::new, |u| u.email.clone());
    let monthly_income = move || {
        session
            .get()
            .user
            .as_ref()
            .and_then(|u| u.income.as_ref())
            .filter(|i| i.monthly > 0.0)
            .map(|i| {
                let code = i.currency.as_deref().unwrap_or("USD");
                format!("{}/mo", format_whole(i.monthly, code))
            })
    };

    let sidebar_class = move || {
        if shell.get().sidebar_open {
            "sidebar sidebar--open"
        } else {
            "sidebar"
        }
    };

    view! {
        <div class="app-layout">
            <aside class=sidebar_class>
                <div class="sidebar__logo">
                    <span class="sidebar__logo-mark">"💸"</span>
                    <span class="sidebar__logo-text">"Mana Karma"</span>
                </div>

                <nav class="sidebar__nav">
                    <span class="sidebar__nav-label">"Main Menu"</span>
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(path, label, icon)| {
                            let navigate = use_navigate();
                            let item_class = move || {
                                if pathname.get() == path {
                                    "nav-item nav-item--active"
                                } else {
                                    "nav-item"
                                }
                            };
                            view! {
                                <button
                                    class=item_class
                                    on:click=move |_| {
                                        shell.update(|s| s.sidebar_open = false);
                                        navigate(path, NavigateOptions::default());
                                    }
                                >
                                    <span class="nav-item__icon">{icon}</span>
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}

                    <span class="sidebar__nav-label">"Account"</span>
                    <button class="nav-item" on:click=sign_out>
                        <span class="nav-item__icon">"🚪"</span>
                        "Sign Out"
                    </button>
                </nav>

                <div class="sidebar__user">
                    <div class="sidebar__user-avatar">{initials}</div>
                    <div>
                        <div class="sidebar__user-name">{full_name}</div>
                        <div class="sidebar__user-email">{email}</div>
                    </div>
                </div>
            </aside>

            <div class="main-content">
                <header class="topbar">
                    <div class="topbar__left">
                        <button
                            class="topbar__hamburger"
                            on:click=move |_| shell.update(|s| s.sidebar_open = !s.sidebar_open)
                        >
                            "☰"
                        </button>
                        <h1 class="topbar__title">
                            {move || page_title(&pathname.get())}
                        </h1>
                    </div>
                    <div class="topbar__actions">
                        <Show when=move || monthly_income().is_some()>
                            <span class="tag tag--blue">{move || monthly_income().unwrap_or_default()}</span>
                        </Show>
                        <div class="topbar__avatar">{initials}</div>
                    </div>
                </header>

                <main class="page-body">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
