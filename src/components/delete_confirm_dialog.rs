//! Delete Confirm Dialog Component
//!
//! Reusable confirmation dialog shown while a delete is pending.

use leptos::prelude::*;

/// Delete confirmation dialog
///
/// Nothing is removed until `on_confirm` runs; cancelling or clicking the
/// backdrop runs `on_cancel`.
///
/// # Arguments
/// * `subject` - Name of the record being deleted, `None` hides the dialog
/// * `on_confirm` - Callback to execute when user confirms deletion
/// * `on_cancel` - Callback to execute when user backs out
#[component]
pub fn DeleteConfirmDialog(
    #[prop(into)] subject: Signal<Option<String>>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || subject.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="modal delete-dialog" on:click=|ev| ev.stop_propagation()>
                    <h3>"Are you sure?"</h3>
                    <p>
                        "This will permanently delete "
                        <strong>{move || subject.get().unwrap_or_default()}</strong>
                        ". This action cannot be undone."
                    </p>
                    <div class="modal-actions">
                        <button class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn-danger" on:click=move |_| on_confirm.run(())>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
