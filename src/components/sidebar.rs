//! Sidebar Component
//!
//! Dashboard navigation with a logout button at the bottom.

use leptos::prelude::*;

use dashboard_core::Route;

use crate::context::{use_navigator, use_session};

#[component]
pub fn Sidebar(
    /// Route currently on screen, for highlighting
    #[prop(into)] active: Signal<Route>,
) -> impl IntoView {
    let navigator = use_navigator();
    let session = use_session();

    let logout = move |_| {
        session.logout();
        navigator.navigate(Route::Login);
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-title">"Admin"</div>
            <nav class="sidebar-nav">
                {Route::DASHBOARD.iter().copied().map(|route| {
                    view! {
                        <button
                            class="nav-item"
                            class:active=move || active.get() == route
                            on:click=move |_| navigator.navigate(route)
                        >
                            {route.label()}
                        </button>
                    }
                }).collect_view()}
            </nav>
            <button class="nav-item logout-btn" on:click=logout>"Logout"</button>
        </aside>
    }
}
