//! Dashboard Core
//!
//! Framework-free state for the admin dashboard:
//! - models: records read from the demo API or created locally
//! - collection / edit / query: the list engine behind the Users and Projects pages
//! - session / route: the login flag and the guard in front of protected pages
//! - overview: counts and chart projections for the dashboard home

pub mod entity;
pub mod error;
pub mod collection;
pub mod edit;
pub mod query;
pub mod session;
pub mod route;
pub mod overview;
pub mod lifetime;
pub mod models;

pub use entity::Entity;
pub use error::{CreateError, EditError, LoginError, LoginField};
pub use collection::{Collection, IdAllocator};
pub use edit::{EditMode, EditSession, Editable};
pub use query::{filter_and_sort, filter_and_sort_by, locale_compare, sort_records_by, Searchable, SortKey, SortOrder, SortState};
pub use session::{Credentials, FlagStorage, MemoryStorage, SessionFlag, DEFAULT_SESSION_KEY};
pub use route::{guard, landing_target, Guarded, Route};
pub use overview::{completion_rate, format_rate, ChartLimits, Overview, OverviewStats, UserActivity, UserPosts};
pub use lifetime::ViewLifetime;
