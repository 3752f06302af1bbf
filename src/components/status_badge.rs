use leptos::prelude::*;

use dashboard_core::models::ProjectStatus;

#[component]
pub fn StatusBadge(status: ProjectStatus) -> impl IntoView {
    view! { <span class=status.badge_class()>{status.label()}</span> }
}
