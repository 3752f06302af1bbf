//! UI Components
//!
//! Reusable Leptos components.

mod charts;
mod delete_confirm_dialog;
mod login_form;
mod project_create_dialog;
mod project_drawer;
mod project_fields;
mod sidebar;
mod stat_card;
mod status_badge;
mod toaster;
mod user_edit_modal;

pub use charts::{ActivityLineChart, PostsBarChart};
pub use delete_confirm_dialog::DeleteConfirmDialog;
pub use login_form::LoginForm;
pub use project_create_dialog::ProjectCreateDialog;
pub use project_drawer::ProjectDrawer;
pub use project_fields::{ProjectFields, StatusSelect};
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
pub use toaster::Toaster;
pub use user_edit_modal::UserEditModal;
