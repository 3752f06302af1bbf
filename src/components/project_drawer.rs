//! Project Drawer Component
//!
//! Side panel editor over the modal buffer of the projects page.

use leptos::prelude::*;
use reactive_stores::Store;

use dashboard_core::models::ProjectDraft;

use crate::components::ProjectFields;
use crate::store::{log_rejected, store_mutate, ProjectsPageState, ProjectsPageStateStoreFields};

#[component]
pub fn ProjectDrawer(store: Store<ProjectsPageState>) -> impl IntoView {
    let cancel = move || store.edit().write().cancel();
    let save = move |_| {
        log_rejected("save project", store_mutate(store, |s| s.commit_edit()));
    };

    view! {
        <Show when=move || store.edit().read().modal_id().is_some()>
            <div class="drawer-backdrop" on:click=move |_| cancel()>
                <aside class="drawer" on:click=|ev| ev.stop_propagation()>
                    <h3>"Edit Project"</h3>
                    <p class="muted">"Update the project details below."</p>
                    <ProjectFields
                        value=Signal::derive(move || store.edit().read().draft().cloned().unwrap_or_default())
                        on_change=Callback::new(move |draft: ProjectDraft| {
                            store.edit().write().update_draft(|buffer| *buffer = draft);
                        })
                    />
                    <div class="modal-actions">
                        <button class="btn" on:click=move |_| cancel()>"Cancel"</button>
                        <button class="btn btn-primary" on:click=save>"Save Changes"</button>
                    </div>
                </aside>
            </div>
        </Show>
    }
}
