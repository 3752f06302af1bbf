//! Models
//!
//! Users, posts and todos come from the demo API; projects exist only in the page.

mod user;
mod project;
mod activity;

pub use user::{Company, User, UserDraft, UserSortField};
pub use project::{Project, ProjectDraft, ProjectStatus};
pub use activity::{Post, Todo};
