//! User Edit Modal Component
//!
//! Full-form editor over the modal buffer of the users page. Shown while the
//! edit session is in modal mode.

use leptos::prelude::*;
use reactive_stores::Store;

use dashboard_core::models::UserDraft;

use crate::store::{log_rejected, store_mutate, UsersPageState, UsersPageStateStoreFields};

#[component]
pub fn UserEditModal(store: Store<UsersPageState>) -> impl IntoView {
    let is_open = move || store.edit().read().modal_id().is_some();

    let field = move |get: fn(&UserDraft) -> String| {
        move || store.edit().read().draft().map(get).unwrap_or_default()
    };
    let set_field = move |set: fn(&mut UserDraft, String)| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            store.edit().write().update_draft(|d| set(d, value));
        }
    };

    let save = move |_| {
        log_rejected("save user", store_mutate(store, |s| s.commit_edit()));
    };
    let cancel = move || store.edit().write().cancel();

    view! {
        <Show when=is_open>
            <div class="modal-backdrop" on:click=move |_| cancel()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h3>"Edit User"</h3>
                    <p class="muted">"Make changes to the user information below."</p>
                    <label>
                        "Name"
                        <input
                            type="text"
                            placeholder="Enter name"
                            prop:value=field(|d| d.name.clone())
                            on:input=set_field(|d, v| d.name = v)
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            type="email"
                            placeholder="Enter email"
                            prop:value=field(|d| d.email.clone())
                            on:input=set_field(|d, v| d.email = v)
                        />
                    </label>
                    <label>
                        "Company"
                        <input
                            type="text"
                            placeholder="Enter company name"
                            prop:value=field(|d| d.company.clone())
                            on:input=set_field(|d, v| d.company = v)
                        />
                    </label>
                    <div class="modal-actions">
                        <button class="btn" on:click=move |_| cancel()>"Cancel"</button>
                        <button class="btn btn-primary" on:click=save>"Save Changes"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
