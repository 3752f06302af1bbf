//! Users Page
//!
//! Fetched user list with search, sortable columns, inline and modal edit,
//! and confirmed delete. Edits are local to the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use dashboard_core::models::{User, UserDraft, UserSortField};
use dashboard_core::SortOrder;

use super::view_lifetime;
use crate::api;
use crate::components::{DeleteConfirmDialog, UserEditModal};
use crate::context::use_config;
use crate::store::{log_rejected, store_mutate, UsersPageState, UsersPageStateStoreFields};

/// "Showing 3 of 10 users"
pub fn summary_label(shown: usize, total: usize) -> String {
    format!("Showing {} of {} users", shown, total)
}

fn sort_indicator(active: bool, order: SortOrder) -> &'static str {
    match (active, order) {
        (false, _) => "↕",
        (true, SortOrder::Asc) => "↑",
        (true, SortOrder::Desc) => "↓",
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let config = use_config();
    let lifetime = view_lifetime();
    let store = Store::new(UsersPageState::new());

    spawn_local(async move {
        let result = api::list_users(&config).await;
        let applied = lifetime.run(|| {
            store_mutate(store, |state| {
                match result {
                    Ok(users) => state.users.replace_all(users),
                    Err(e) => log::warn!("failed to load users: {}", e),
                }
                state.loading = false;
            })
        });
        if applied.is_none() {
            log::debug!("users response arrived after the page was left");
        }
    });

    let visible = Memo::new(move |_| store.read().visible());
    let total = move || store.users().read().len();

    view! {
        <section class="page">
            <header class="page-header">
                <h1>"Users Management"</h1>
                <p class="muted">"Manage and organize your user database"</p>
            </header>

            <input
                class="search"
                type="search"
                placeholder="Search by name, email, or company..."
                prop:value=move || store.query().get()
                on:input=move |ev| store.query().set(event_target_value(&ev))
            />

            <div class="card table-card">
                <Show
                    when=move || !store.loading().get()
                    fallback=|| view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            <p class="muted">"Loading users..."</p>
                        </div>
                    }
                >
                    <table>
                        <thead>
                            <tr>
                                {UserSortField::ALL.into_iter().map(|field| view! {
                                    <th>
                                        <button class="sort-btn" on:click=move |_| store.sort().update(|s| s.toggle(field))>
                                            {field.label()}
                                            <span class="sort-indicator">
                                                {move || {
                                                    let sort = store.sort().get();
                                                    sort_indicator(sort.is_active(field), sort.order)
                                                }}
                                            </span>
                                        </button>
                                    </th>
                                }).collect_view()}
                                <th class="actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || visible.with(Vec::is_empty)>
                                <tr>
                                    <td colspan="4" class="empty">"No users found matching your search."</td>
                                </tr>
                            </Show>
                            <For
                                each=move || visible.get()
                                key=|user| (user.id, user.name.clone(), user.email.clone(), user.company.name.clone())
                                children=move |user| view! { <UserRow user=user store=store /> }
                            />
                        </tbody>
                    </table>
                </Show>
            </div>

            <Show when=move || !store.loading().get()>
                <p class="summary">{move || summary_label(visible.with(Vec::len), total())}</p>
            </Show>

            <UserEditModal store=store />
            <DeleteConfirmDialog
                subject=Signal::derive(move || -> Option<String> {
                    let id = store.edit().read().pending_delete()?;
                    store.users().read().get(id).map(|user| user.name.clone())
                })
                on_confirm=Callback::new(move |_: ()| {
                    log_rejected("delete user", store_mutate(store, |s| s.confirm_delete()));
                })
                on_cancel=Callback::new(move |_: ()| store.edit().write().cancel())
            />
        </section>
    }
}

/// One table row; switches to inputs while quick-editing
#[component]
fn UserRow(user: User, store: Store<UsersPageState>) -> impl IntoView {
    let id = user.id;
    let editing = move || store.edit().read().inline_id() == Some(id);

    let cell = move |shown: String, get: fn(&UserDraft) -> String, set: fn(&mut UserDraft, String)| {
        move || {
            if editing() {
                view! {
                    <input
                        type="text"
                        prop:value=move || store.edit().read().draft().map(get).unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            store.edit().write().update_draft(|d| set(d, value));
                        }
                    />
                }
                .into_any()
            } else {
                view! { <span>{shown.clone()}</span> }.into_any()
            }
        }
    };

    let start_inline = move |_| log_rejected("quick edit", store_mutate(store, |s| s.start_inline(id)));
    let open_modal = move |_| log_rejected("edit", store_mutate(store, |s| s.open_modal(id)));
    let request_delete = move |_| log_rejected("delete", store.edit().write().request_delete(id));
    let save = move |_| log_rejected("save user", store_mutate(store, |s| s.commit_edit()));
    let cancel = move |_| store.edit().write().cancel();

    view! {
        <tr>
            <td class="strong">{cell(user.name, |d| d.name.clone(), |d, v| d.name = v)}</td>
            <td>{cell(user.email, |d| d.email.clone(), |d, v| d.email = v)}</td>
            <td>{cell(user.company.name, |d| d.company.clone(), |d, v| d.company = v)}</td>
            <td class="actions">
                <Show
                    when=editing
                    fallback=move || view! {
                        <button class="btn btn-sm" title="Inline Edit" on:click=start_inline>"Quick Edit"</button>
                        <button class="btn btn-sm" title="Modal Edit" on:click=open_modal>"Edit"</button>
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
    fn test_summary_label() {
        assert_eq!(summary_label(3, 10), "Showing 3 of 10 users");
        assert_eq!(summary_label(0, 0), "Showing 0 of 0 users");
    }

    #[test]
    fn test_sort_indicator_only_on_active_column() {
        assert_eq!(sort_indicator(false, SortOrder::Desc), "↕");
        assert_eq!(sort_indicator(true, SortOrder::Asc), "↑");
        assert_eq!(sort_indicator(true, SortOrder::Desc), "↓");
    }
}
