//! Page State Stores
//!
//! Each list page owns a reactive_stores store for its lifetime, so edits are
//! dropped when the page is left, like a reload.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use reactive_stores::Store;

use dashboard_core::models::{Project, ProjectDraft, User, UserSortField};
use dashboard_core::{filter_and_sort_by, Collection, CreateError, EditError, EditSession, IdAllocator, SortState};

use crate::web;

/// Users page: fetched users plus search, sort and edit state
#[derive(Clone, Debug, Default, Store)]
pub struct UsersPageState {
    pub users: Collection<User>,
    pub loading: bool,
    pub query: String,
    pub sort: SortState<UserSortField>,
    pub edit: EditSession<User>,
}

impl UsersPageState {
    pub fn new() -> Self {
        Self { loading: true, ..Default::default() }
    }

    /// Filtered, then sorted copy of the users
    pub fn visible(&self) -> Vec<User> {
        filter_and_sort_by(self.users.as_slice(), &self.query, self.sort, web::collate)
    }

    pub fn start_inline(&mut self, id: u32) -> Result<(), EditError> {
        match self.users.get(id) {
            Some(user) => self.edit.start_inline(user),
            None => Err(EditError::RecordMissing),
        }
    }

    pub fn open_modal(&mut self, id: u32) -> Result<(), EditError> {
        match self.users.get(id) {
            Some(user) => self.edit.open_modal(user),
            None => Err(EditError::RecordMissing),
        }
    }

    pub fn commit_edit(&mut self) -> Result<u32, EditError> {
        self.edit.commit(&mut self.users)
    }

    pub fn confirm_delete(&mut self) -> Result<User, EditError> {
        self.edit.confirm_delete(&mut self.users)
    }
}

/// Projects page: locally created projects, id counter, create form and edit state
#[derive(Clone, Debug, Default, Store)]
pub struct ProjectsPageState {
    pub projects: Collection<Project>,
    pub ids: IdAllocator,
    pub edit: EditSession<Project>,
    pub create_open: bool,
    pub create_form: ProjectDraft,
}

impl ProjectsPageState {
    /// Append the create form as a new project, then reset and close the form.
    /// A blank name leaves everything as it was.
    pub fn submit_create(&mut self, now: DateTime<Utc>) -> Result<u32, CreateError> {
        let id = self.projects.create(&mut self.ids, &self.create_form, now)?;
        self.create_form = ProjectDraft::default();
        self.create_open = false;
        Ok(id)
    }

    pub fn start_inline(&mut self, id: u32) -> Result<(), EditError> {
        match self.projects.get(id) {
            Some(project) => self.edit.start_inline(project),
            None => Err(EditError::RecordMissing),
        }
    }

    pub fn open_drawer(&mut self, id: u32) -> Result<(), EditError> {
        match self.projects.get(id) {
            Some(project) => self.edit.open_modal(project),
            None => Err(EditError::RecordMissing),
        }
    }

    pub fn commit_edit(&mut self) -> Result<u32, EditError> {
        self.edit.commit(&mut self.projects)
    }

    pub fn confirm_delete(&mut self) -> Result<Project, EditError> {
        self.edit.confirm_delete(&mut self.projects)
    }
}

/// Mutate a whole store under one write guard. Needed when an operation
/// touches two fields at once (edit state and the collection).
pub fn store_mutate<T, R>(store: Store<T>, f: impl FnOnce(&mut T) -> R) -> R
where
    T: Send + Sync + 'static,
{
    let mut state = store.write();
    f(&mut *state)
}

/// Log a rejected edit transition; the UI keeps its previous state
pub fn log_rejected<T>(action: &str, result: Result<T, EditError>) {
    if let Err(e) = result {
        log::warn!("{} rejected: {}", action, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use dashboard_core::models::{Company, ProjectStatus};
    use dashboard_core::SortOrder;

    fn user(id: u32, name: &str, company: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: String::new(),
            email: format!("{}@example.com", name.to_lowercase()),
            company: Company { name: company.to_string() },
        }
    }

    fn users_page() -> UsersPageState {
        UsersPageState {
            users: Collection::from_records(vec![
                user(1, "Chelsey", "Keebler LLC"),
                user(2, "Ada", "Hoeger LLC"),
                user(3, "Bret", "Romaguera"),
            ]),
            loading: false,
            ..Default::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_visible_users_filter_then_sort() {
        let mut page = users_page();
        let names = |page: &UsersPageState| page.visible().into_iter().map(|u| u.name).collect::<Vec<_>>();
        assert_eq!(names(&page), vec!["Ada", "Bret", "Chelsey"]);

        page.query = "llc".to_string();
        page.sort.toggle(UserSortField::Name);
        assert_eq!(page.sort.order, SortOrder::Desc);
        assert_eq!(names(&page), vec!["Chelsey", "Ada"]);
        assert_eq!(page.users.len(), 3);
    }

    #[test]
    fn test_delete_intent_alone_keeps_users() {
        let mut page = users_page();
        page.edit.request_delete(2).unwrap();
        assert_eq!(page.users.len(), 3);

        assert_eq!(page.confirm_delete().map(|u| u.id), Ok(2));
        assert!(!page.users.contains(2));
    }

    #[test]
    fn test_missing_user_cannot_be_edited() {
        let mut page = users_page();
        assert_eq!(page.start_inline(42), Err(EditError::RecordMissing));
        assert_eq!(page.open_modal(42), Err(EditError::RecordMissing));
        assert!(page.edit.is_idle());
    }

    #[test]
    fn test_submit_create_resets_form_only_on_success() {
        let mut page = ProjectsPageState::default();
        page.create_open = true;
        page.create_form.description = "kept while invalid".to_string();

        assert_eq!(page.submit_create(now()), Err(CreateError::EmptyName));
        assert!(page.create_open);
        assert_eq!(page.create_form.description, "kept while invalid");

        page.create_form.name = "Launch".to_string();
        page.create_form.status = ProjectStatus::Pending;
        assert_eq!(page.submit_create(now()), Ok(1));
        assert!(!page.create_open);
        assert_eq!(page.create_form, ProjectDraft::default());
        assert_eq!(page.projects.get(1).unwrap().status, ProjectStatus::Pending);
    }

    #[test]
    fn test_drawer_edit_round_trip() {
        let mut page = ProjectsPageState::default();
        page.create_form.name = "Docs".to_string();
        page.submit_create(now()).unwrap();

        page.open_drawer(1).unwrap();
        page.edit.update_draft(|d| d.status = ProjectStatus::Completed);
        assert!(page.edit.is_dirty());
        assert_eq!(page.start_inline(1), Err(EditError::UnsavedChanges));

        assert_eq!(page.commit_edit(), Ok(1));
        assert_eq!(page.projects.get(1).unwrap().status, ProjectStatus::Completed);
    }
}
