//! Stat Card Component

use leptos::prelude::*;

/// Titled number on the overview page
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-title">{title}</div>
            <div class="stat-value">{move || value.get()}</div>
            {hint.map(|hint| view! { <div class="stat-hint">{hint}</div> })}
        </div>
    }
}
