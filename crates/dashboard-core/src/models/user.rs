//! User Model
//!
//! Read verbatim from the demo API. Unknown fields (address, phone, ...) are ignored.

use serde::{Deserialize, Serialize};

use crate::edit::Editable;
use crate::entity::Entity;
use crate::query::{Searchable, SortKey};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    /// Short handle, used as the bar chart label
    #[serde(default)]
    pub username: String,
    pub email: String,
    pub company: Company,
}

/// Editable user fields; company is edited by name only
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub company: String,
}

/// Sortable columns of the users table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserSortField {
    #[default]
    Name,
    Email,
    Company,
}

impl UserSortField {
    pub const ALL: [UserSortField; 3] = [UserSortField::Name, UserSortField::Email, UserSortField::Company];

    pub fn label(&self) -> &'static str {
        match self {
            UserSortField::Name => "Name",
            UserSortField::Email => "Email",
            UserSortField::Company => "Company",
        }
    }
}

impl User {
    /// First word of the full name
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or_default()
    }

    /// Username, or the first name when the API omitted it
    pub fn handle(&self) -> &str {
        if self.username.is_empty() {
            self.first_name()
        } else {
            self.username.as_str()
        }
    }
}

impl Entity for User {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Editable for User {
    type Draft = UserDraft;

    fn draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.name.clone(),
        }
    }

    fn apply_draft(&mut self, draft: UserDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.company = Company { name: draft.company };
    }

    /// Inline saves keep the old company when its cell was cleared
    fn apply_inline(&mut self, draft: UserDraft) {
        self.name = draft.name;
        self.email = draft.email;
        if !draft.company.is_empty() {
            self.company = Company { name: draft.company };
        }
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.company.name.as_str()]
    }
}

impl SortKey<UserSortField> for User {
    fn sort_key(&self, field: UserSortField) -> &str {
        match field {
            UserSortField::Name => self.name.as_str(),
            UserSortField::Email => self.email.as_str(),
            UserSortField::Company => self.company.name.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Collection;
    use crate::edit::EditSession;
    use crate::query::{filter_and_sort, SortOrder, SortState};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn user(id: u32, name: &str, email: &str, company: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: String::new(),
            email: email.to_string(),
            company: Company { name: company.to_string() },
        }
    }

    fn directory() -> Collection<User> {
        Collection::from_records(vec![
            user(1, "Leanne Graham", "Sincere@april.biz", "Romaguera-Crona"),
            user(2, "Ervin Howell", "Shanna@melissa.tv", "Deckow-Crist"),
            user(3, "Clementine Bauch", "Nathan@yesenia.net", "Romaguera-Jacobson"),
        ])
    }

    #[test]
    fn test_deserialize_api_user_ignores_extra_fields() {
        let value = json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light", "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442",
            "company": { "name": "Romaguera-Crona", "catchPhrase": "Multi-layered client-server neural-net" }
        });
        let parsed: User = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.username, "Bret");
        assert_eq!(parsed.company.name, "Romaguera-Crona");
        assert_eq!(parsed.handle(), "Bret");
        assert_eq!(parsed.first_name(), "Leanne");
    }

    #[test]
    fn test_search_covers_name_email_and_company() {
        let users = directory();
        let by_company = filter_and_sort(users.as_slice(), "romaguera", SortState::new(UserSortField::Name));
        let ids: Vec<_> = by_company.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 1]);

        let by_email = filter_and_sort(users.as_slice(), "MELISSA", SortState::new(UserSortField::Name));
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].id, 2);
    }

    #[test]
    fn test_sort_by_company_descending() {
        let users = directory();
        let sort = SortState { field: UserSortField::Company, order: SortOrder::Desc };
        let ids: Vec<_> = filter_and_sort(users.as_slice(), "", sort).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_inline_save_keeps_company_when_cleared() {
        let mut users = directory();
        let mut session = EditSession::new();

        session.start_inline(users.get(2).unwrap()).unwrap();
        session.update_draft(|d| {
            d.name = "Ervin H.".to_string();
            d.company.clear();
        });
        session.commit(&mut users).unwrap();

        let edited = users.get(2).unwrap();
        assert_eq!(edited.name, "Ervin H.");
        assert_eq!(edited.company.name, "Deckow-Crist");
    }

    #[test]
    fn test_modal_save_writes_every_field() {
        let mut users = directory();
        let mut session = EditSession::new();

        session.open_modal(users.get(1).unwrap()).unwrap();
        session.update_draft(|d| {
            d.email = "leanne@example.com".to_string();
            d.company = "Acme".to_string();
        });
        session.commit(&mut users).unwrap();

        let edited = users.get(1).unwrap();
        assert_eq!(edited.email, "leanne@example.com");
        assert_eq!(edited.company, Company { name: "Acme".to_string() });
        assert_eq!(edited.name, "Leanne Graham");
    }

    /// One user action on the users page
    #[derive(Debug, Clone)]
    enum Op {
        QuickEdit(u32, &'static str),
        Modal(u32, &'static str),
        AbandonedModal(u32, &'static str),
        Delete(u32),
        DeleteIntent(u32),
    }

    /// Drive the edit session the way the page does
    fn run_through_session(ops: &[Op]) -> Collection<User> {
        let mut users = directory();
        let mut session = EditSession::new();
        for op in ops {
            match op {
                Op::QuickEdit(id, company) => {
                    if let Some(user) = users.get(*id).cloned() {
                        session.start_inline(&user).unwrap();
                        session.update_draft(|d| d.company = company.to_string());
                        session.commit(&mut users).unwrap();
                    }
                }
                Op::Modal(id, company) => {
                    if let Some(user) = users.get(*id).cloned() {
                        session.open_modal(&user).unwrap();
                        session.update_draft(|d| d.company = company.to_string());
                        session.commit(&mut users).unwrap();
                    }
                }
                Op::AbandonedModal(id, name) => {
                    if let Some(user) = users.get(*id).cloned() {
                        session.open_modal(&user).unwrap();
                        session.update_draft(|d| d.name = name.to_string());
                        session.cancel();
                    }
                }
                Op::Delete(id) => {
                    session.request_delete(*id).unwrap();
                    let _ = session.confirm_delete(&mut users);
                }
                Op::DeleteIntent(id) => {
                    session.request_delete(*id).unwrap();
                    session.cancel();
                }
            }
        }
        users
    }

    /// Apply the same actions directly to a plain list
    fn run_directly(ops: &[Op]) -> Vec<User> {
        let mut users = directory().as_slice().to_vec();
        for op in ops {
            match op {
                Op::QuickEdit(id, company) => {
                    if let Some(u) = users.iter_mut().find(|u| u.id == *id) {
                        if !company.is_empty() {
                            u.company.name = company.to_string();
                        }
                    }
                }
                Op::Modal(id, company) => {
                    if let Some(u) = users.iter_mut().find(|u| u.id == *id) {
                        u.company.name = company.to_string();
                    }
                }
                Op::AbandonedModal(..) | Op::DeleteIntent(_) => {}
                Op::Delete(id) => users.retain(|u| u.id != *id),
            }
        }
        users
    }

    #[test]
    fn test_operation_sequences_are_deterministic() {
        let scripts: Vec<Vec<Op>> = vec![
            vec![Op::QuickEdit(1, "Acme"), Op::Delete(2), Op::Modal(3, "")],
            vec![Op::QuickEdit(2, ""), Op::DeleteIntent(1), Op::AbandonedModal(1, "Nobody"), Op::Modal(1, "Initech")],
            vec![
                Op::Delete(1),
                Op::QuickEdit(1, "Gone"),
                Op::Modal(2, "Globex"),
                Op::Delete(7),
                Op::QuickEdit(3, "Hooli"),
                Op::Delete(3),
            ],
        ];
        for script in scripts {
            let first = run_through_session(&script);
            let second = run_through_session(&script);
            assert_eq!(first, second);
            assert_eq!(first.as_slice(), run_directly(&script).as_slice());
        }
    }
}
