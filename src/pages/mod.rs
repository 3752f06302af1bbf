//! Pages
//!
//! One component per route.

mod landing;
mod login;
mod overview;
mod projects;
mod users;

use leptos::prelude::on_cleanup;

use dashboard_core::ViewLifetime;

pub use landing::LandingPage;
pub use login::LoginPage;
pub use overview::OverviewPage;
pub use projects::ProjectsPage;
pub use users::UsersPage;

/// Lifetime token for async work started by the current view, ended when the
/// view is cleaned up
fn view_lifetime() -> ViewLifetime {
    let lifetime = ViewLifetime::new();
    let token = lifetime.clone();
    on_cleanup(move || token.end());
    lifetime
}
