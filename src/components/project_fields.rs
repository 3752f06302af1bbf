//! Project Fields Component
//!
//! Name, description and status inputs shared by the create dialog and the
//! edit drawer.

use leptos::prelude::*;

use dashboard_core::models::{ProjectDraft, ProjectStatus};

#[component]
pub fn ProjectFields(
    #[prop(into)] value: Signal<ProjectDraft>,
    #[prop(into)] on_change: Callback<ProjectDraft>,
) -> impl IntoView {
    let edit = move |apply: fn(&mut ProjectDraft, String)| {
        move |ev: web_sys::Event| {
            let mut draft = value.get_untracked();
            apply(&mut draft, event_target_value(&ev));
            on_change.run(draft);
        }
    };

    view! {
        <label>
            "Name"
            <input
                type="text"
                placeholder="Enter project name"
                prop:value=move || value.with(|d| d.name.clone())
                on:input=edit(|d, v| d.name = v)
            />
        </label>
        <label>
            "Description"
            <textarea
                rows=3
                placeholder="Enter project description"
                prop:value=move || value.with(|d| d.description.clone())
                on:input=edit(|d, v| d.description = v)
            />
        </label>
        <label>
            "Status"
            <StatusSelect
                value=Signal::derive(move || value.with(|d| d.status))
                on_change=Callback::new(move |status: ProjectStatus| {
                    let mut draft = value.get_untracked();
                    draft.status = status;
                    on_change.run(draft);
                })
            />
        </label>
    }
}

/// `<select>` over every project status
#[component]
pub fn StatusSelect(
    #[prop(into)] value: Signal<ProjectStatus>,
    #[prop(into)] on_change: Callback<ProjectStatus>,
) -> impl IntoView {
    view! {
        <select
            prop:value=move || value.get().as_str()
            on:change=move |ev| on_change.run(ProjectStatus::from_value(&event_target_value(&ev)))
        >
            {ProjectStatus::ALL.into_iter().map(|status| view! {
                <option value=status.as_str() selected=move || value.get() == status>
                    {status.label()}
                </option>
            }).collect_view()}
        </select>
    }
}
