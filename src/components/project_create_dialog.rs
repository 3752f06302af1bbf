//! Project Create Dialog Component

use chrono::Utc;
use leptos::prelude::*;
use reactive_stores::Store;

use dashboard_core::models::ProjectDraft;

use crate::components::ProjectFields;
use crate::store::{store_mutate, ProjectsPageState, ProjectsPageStateStoreFields};

#[component]
pub fn ProjectCreateDialog(store: Store<ProjectsPageState>) -> impl IntoView {
    let close = move || store.create_open().set(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match store_mutate(store, |s| s.submit_create(Utc::now())) {
            Ok(id) => log::info!("created project {}", id),
            Err(e) => log::debug!("create blocked: {}", e),
        }
    };

    view! {
        <Show when=move || store.create_open().get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <form class="modal" on:click=|ev| ev.stop_propagation() on:submit=submit>
                    <h3>"Create New Project"</h3>
                    <p class="muted">"Add a new project to your list."</p>
                    <ProjectFields
                        value=Signal::derive(move || store.create_form().get())
                        on_change=Callback::new(move |draft: ProjectDraft| store.create_form().set(draft))
                    />
                    <div class="modal-actions">
                        <button type="button" class="btn" on:click=move |_| close()>"Cancel"</button>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || store.create_form().read().name.trim().is_empty()
                        >
                            "Create Project"
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
