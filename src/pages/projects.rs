//! Projects Page
//!
//! Locally created projects with inline edit, drawer edit and confirmed
//! delete. Nothing is fetched or persisted.

use leptos::prelude::*;
use reactive_stores::Store;

use dashboard_core::models::{Project, ProjectDraft, ProjectStatus};

use crate::components::{DeleteConfirmDialog, ProjectCreateDialog, ProjectDrawer, StatusBadge, StatusSelect};
use crate::store::{log_rejected, store_mutate, ProjectsPageState, ProjectsPageStateStoreFields};

/// "1 project total", "3 projects total"
pub fn count_label(count: usize) -> String {
    let noun = if count == 1 { "project" } else { "projects" };
    format!("{} {} total", count, noun)
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let store = Store::new(ProjectsPageState::default());
    let projects = move || store.projects().read().as_slice().to_vec();
    let count = move || store.projects().read().len();

    view! {
        <section class="page">
            <header class="page-header with-action">
                <div>
                    <h1>"Projects Management"</h1>
                    <p class="muted">"Create and manage your projects efficiently"</p>
                </div>
                <button class="btn btn-primary" on:click=move |_| store.create_open().set(true)>
                    "+ Create Project"
                </button>
            </header>

            <div class="card table-card">
                <div class="card-header">
                    <h2>"Projects List"</h2>
                    <p class="muted">{move || count_label(count())}</p>
                </div>
                <Show
                    when=move || { count() > 0 }
                    fallback=|| view! {
                        <div class="empty-state">
                            <p>"No projects yet"</p>
                            <p class="muted">"Create your first project using the button above"</p>
                        </div>
                    }
                >
                    <table>
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Description"</th>
                                <th>"Status"</th>
                                <th class="actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=projects
                                key=|p| (p.id, p.name.clone(), p.description.clone(), p.status)
                                children=move |project| view! { <ProjectRow project=project store=store /> }
                            />
                        </tbody>
                    </table>
                </Show>
            </div>

            <ProjectCreateDialog store=store />
            <ProjectDrawer store=store />
            <DeleteConfirmDialog
                subject=Signal::derive(move || -> Option<String> {
                    let id = store.edit().read().pending_delete()?;
                    store.projects().read().get(id).map(|project| project.name.clone())
                })
                on_confirm=Callback::new(move |_: ()| {
                    log_rejected("delete project", store_mutate(store, |s| s.confirm_delete()));
                })
                on_cancel=Callback::new(move |_: ()| store.edit().write().cancel())
            />
        </section>
    }
}

#[component]
fn ProjectRow(project: Project, store: Store<ProjectsPageState>) -> impl IntoView {
    let id = project.id;
    let editing = move || store.edit().read().inline_id() == Some(id);
    let draft_text = move |get: fn(&ProjectDraft) -> String| {
        move || store.edit().read().draft().map(get).unwrap_or_default()
    };

    let start_inline = move |_| log_rejected("quick edit", store_mutate(store, |s| s.start_inline(id)));
    let open_drawer = move |_| log_rejected("edit", store_mutate(store, |s| s.open_drawer(id)));
    let request_delete = move |_| log_rejected("delete", store.edit().write().request_delete(id));
    let save = move |_| log_rejected("save project", store_mutate(store, |s| s.commit_edit()));
    let cancel = move |_| store.edit().write().cancel();

    let name = project.name.clone();
    let description = project.description_or_placeholder().to_string();
    let has_description = !project.description.is_empty();
    let status = project.status;

    view! {
        <tr>
            <td class="strong">
                <Show when=editing fallback=move || view! { <span>{name.clone()}</span> }>
                    <input
                        type="text"
                        prop:value=draft_text(|d| d.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            store.edit().write().update_draft(|d| d.name = value);
                        }
                    />
                </Show>
            </td>
            <td>
                <Show
                    when=editing
                    fallback=move || view! {
                        <span class:muted=!has_description>{description.clone()}</span>
                    }
                >
                    <textarea
                        rows=2
                        prop:value=draft_text(|d| d.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            store.edit().write().update_draft(|d| d.description = value);
                        }
                    />
                </Show>
            </td>
            <td>
                <Show when=editing fallback=move || view! { <StatusBadge status=status /> }>
                    <StatusSelect
                        value=Signal::derive(move || {
                            store.edit().read().draft().map(|d| d.status).unwrap_or(status)
                        })
                        on_change=Callback::new(move |next: ProjectStatus| {
                            store.edit().write().update_draft(|d| d.status = next);
                        })
                    />
                </Show>
            </td>
            <td class="actions">
                <Show
                    when=editing
                    fallback=move || view! {
                        <button class="btn btn-sm" title="Inline Edit" on:click=start_inline>"Quick Edit"</button>
                        <button class="btn btn-sm" title="Edit in Drawer" on:click=open_drawer>"Edit"</button>
                        <button class="btn btn-sm btn-danger" on:click=request_delete>"Delete"</button>
                    }
                >
                    <button class="btn btn-sm btn-primary" on:click=save>"Save"</button>
                    <button class="btn btn-sm" on:click=cancel>"Cancel"</button>
                </Show>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label_pluralizes() {
        assert_eq!(count_label(0), "0 projects total");
        assert_eq!(count_label(1), "1 project total");
        assert_eq!(count_label(2), "2 projects total");
    }
}
