//! Root application component: routing, context providers, and the one-shot
//! startup session resolution.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};

use crate::components::layout::AppLayout;
use crate::components::loading::LoadingScreen;
use crate::components::toast::ToastHost;
use crate::pages::{
    dashboard::DashboardPage, goals::GoalsPage, insights::InsightsPage, login::LoginPage,
    onboarding::OnboardingPage, profile::ProfilePage, register::RegisterPage,
    statements::StatementsPage, transactions::TransactionsPage,
};
use crate::state::gate::{self, GateDecision, RouteCategory};
use crate::state::session::SessionState;
use crate::state::ui::ToastState;
use crate::storage::TokenStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, toast, and token-store contexts, kicks off the
/// startup verification, and sets up client-side routing with the route
/// authorization gate wrapped around every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = TokenStore::browser();
    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(store);
    provide_context(session);
    provide_context(toasts);

    // Initial resolution runs exactly once for the lifetime of the tab: the
    // component body executes a single time, and nothing else re-triggers it.
    // Later token changes only happen through explicit login/register/logout.
    #[cfg(feature = "hydrate")]
    {
        let cached = store.load();
        session.update(|s| s.hydrate(cached.profile));
        let started = session.get_untracked().epoch();
        wasm_bindgen_futures::spawn_local(async move {
            use crate::state::resolver::{Resolution, resolve_session};
            match resolve_session(&store, crate::net::api::fetch_current_user).await {
                Resolution::Authenticated(profile) => {
                    // A logout racing the verify bumps the epoch and wins.
                    session.update(|s| {
                        let _ = s.apply_profile(profile, started);
                    });
                }
                Resolution::Unauthenticated => {
                    session.update(SessionState::resolve_unauthenticated);
                }
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/manakarma.css"/>
        <Title text="Mana Karma"/>

        <Router>
            <ToastHost/>
            <Routes fallback=|| view! { <Redirect path="/dashboard"/> }>
                <Route
                    path=StaticSegment("login")
                    view=|| view! {
                        <Guarded category=RouteCategory::Public>
                            <LoginPage/>
                        </Guarded>
                    }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! {
                        <Guarded category=RouteCategory::Public>
                            <RegisterPage/>
                        </Guarded>
                    }
                />
                <Route
                    path=StaticSegment("onboarding")
                    view=|| view! {
                        <Guarded category=RouteCategory::Onboarding>
                            <OnboardingPage/>
                        </Guarded>
                    }
                />
                <ParentRoute
                    path=StaticSegment("")
                    view=|| view! {
                        <Guarded category=RouteCategory::Protected>
                            <AppLayout/>
                        </Guarded>
                    }
                >
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("transactions") view=TransactionsPage/>
                    <Route path=StaticSegment("statements") view=StatementsPage/>
                    <Route path=StaticSegment("insights") view=InsightsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("goals") view=GoalsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Applies the route authorization gate around a page.
///
/// Re-evaluates reactively on every session change, so a session that dies
/// mid-visit (forced invalidation) redirects without any page cooperating.
#[component]
fn Guarded(category: RouteCategory, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || match gate::authorize(&session.get(), category) {
        GateDecision::Render => children().into_any(),
        GateDecision::Loading => view! { <LoadingScreen/> }.into_any(),
        GateDecision::RedirectLogin => view! { <Redirect path="/login"/> }.into_any(),
        GateDecision::RedirectOnboarding => view! { <Redirect path="/onboarding"/> }.into_any(),
        GateDecision::RedirectDashboard => view! { <Redirect path="/dashboard"/> }.into_any(),
    }
}
