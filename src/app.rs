//! Admin Dashboard App
//!
//! Root component: provides context, keeps the hash route in sync, runs the
//! route guard and picks the page.

use leptos::ev;
use leptos::prelude::*;

use dashboard_core::{guard, Guarded, Route};

use crate::components::{Sidebar, Toaster};
use crate::config::AppConfig;
use crate::context::{Navigator, SessionContext, Toasts};
use crate::pages::{LandingPage, LoginPage, OverviewPage, ProjectsPage, UsersPage};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let session = SessionContext::new(&config);
    let navigator = Navigator::new(session);
    let toasts = Toasts::new(&config);
    let session_key = config.session_key.clone();

    // Provide context to all children
    provide_context(config);
    provide_context(session);
    provide_context(navigator);
    provide_context(toasts);

    // Back/forward and hand-edited URLs
    let _hashchange = window_event_listener(ev::hashchange, move |_| navigator.sync_from_location());

    // Login or logout in another tab
    let _storage = window_event_listener(ev::storage, move |event| {
        if event.key().map_or(true, |key| key == session_key) {
            session.refresh();
        }
    });

    let guarded = Memo::new(move |_| guard(navigator.requested.get(), session.authenticated.get()));

    // Apply guard redirects
    Effect::new(move |_| {
        if let Guarded::Redirect(target) = guarded.get() {
            log::debug!("guard: {} -> {}", navigator.requested.get_untracked(), target);
            navigator.redirect(target);
        }
    });

    let route = Memo::new(move |_| guarded.get().route());
    let in_dashboard = Memo::new(move |_| route.get().is_protected());

    view! {
        {move || {
            if in_dashboard.get() {
                view! { <DashboardLayout route=route /> }.into_any()
            } else if route.get() == Route::Login {
                view! { <LoginPage /> }.into_any()
            } else {
                view! { <LandingPage /> }.into_any()
            }
        }}
        <Toaster />
    }
}

/// Sidebar plus the active dashboard page
#[component]
fn DashboardLayout(route: Memo<Route>) -> impl IntoView {
    view! {
        <div class="dashboard-layout">
            <Sidebar active=route />
            <main class="content">
                {move || match route.get() {
                    Route::Users => view! { <UsersPage /> }.into_any(),
                    Route::Projects => view! { <ProjectsPage /> }.into_any(),
                    _ => view! { <OverviewPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
