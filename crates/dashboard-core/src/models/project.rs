//! Project Model
//!
//! Projects are created in the page and live only as long as it does.

use std::convert::Infallible;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::{Collection, IdAllocator};
use crate::edit::Editable;
use crate::entity::Entity;
use crate::error::CreateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Active,
    Pending,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Active,
        ProjectStatus::Pending,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Pending => "pending",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on-hold",
        }
    }

    /// Unknown values fall back to `Active`, the create form's default
    pub fn from_value(s: &str) -> Self {
        match s {
            "pending" => ProjectStatus::Pending,
            "completed" => ProjectStatus::Completed,
            "on-hold" => ProjectStatus::OnHold,
            _ => ProjectStatus::Active,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Pending => "Pending",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
        }
    }

    /// CSS class of the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "badge badge-green",
            ProjectStatus::Pending => "badge badge-yellow",
            ProjectStatus::Completed => "badge badge-blue",
            ProjectStatus::OnHold => "badge badge-gray",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_value(s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}

/// Editable project fields; also the create form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
}

impl Project {
    /// Build a project from the create form. The name must not be blank.
    pub fn create(id: u32, form: &ProjectDraft, created_at: DateTime<Utc>) -> Result<Self, CreateError> {
        if form.name.trim().is_empty() {
            return Err(CreateError::EmptyName);
        }
        Ok(Self {
            id,
            name: form.name.clone(),
            description: form.description.clone(),
            status: form.status,
            created_at,
        })
    }

    /// Description shown in the table
    pub fn description_or_placeholder(&self) -> &str {
        if self.description.is_empty() {
            "No description"
        } else {
            self.description.as_str()
        }
    }
}

impl Entity for Project {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Editable for Project {
    type Draft = ProjectDraft;

    fn draft(&self) -> ProjectDraft {
        ProjectDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
        }
    }

    fn apply_draft(&mut self, draft: ProjectDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.status = draft.status;
    }
}

impl Collection<Project> {
    /// Validate the form, allocate the next id and append. The counter only
    /// advances when a project is actually created.
    pub fn create(
        &mut self,
        ids: &mut IdAllocator,
        form: &ProjectDraft,
        created_at: DateTime<Utc>,
    ) -> Result<u32, CreateError> {
        let project = Project::create(ids.peek(), form, created_at)?;
        let id = ids.allocate();
        self.insert(project);
        log::debug!("created project {}", id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::EditSession;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn form(name: &str) -> ProjectDraft {
        ProjectDraft { name: name.to_string(), ..Default::default() }
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let mut projects = Collection::new();
        let mut ids = IdAllocator::new();

        assert_eq!(projects.create(&mut ids, &form(""), now()), Err(CreateError::EmptyName));
        assert_eq!(projects.create(&mut ids, &form("   "), now()), Err(CreateError::EmptyName));
        assert!(projects.is_empty());
        assert_eq!(ids.peek(), 1);
    }

    #[test]
    fn test_create_allocates_increasing_ids() {
        let mut projects = Collection::new();
        let mut ids = IdAllocator::new();

        assert_eq!(projects.create(&mut ids, &form("Website"), now()), Ok(1));
        assert_eq!(projects.create(&mut ids, &form("Mobile app"), now()), Ok(2));
        projects.remove(2);
        assert_eq!(projects.create(&mut ids, &form("API"), now()), Ok(3));

        let created = projects.get(1).unwrap();
        assert_eq!(created.status, ProjectStatus::Active);
        assert_eq!(created.description_or_placeholder(), "No description");
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_value(ProjectStatus::OnHold).unwrap(), "on-hold");
        for status in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::from_value(status.as_str()), status);
            assert_eq!(status.as_str().parse::<ProjectStatus>(), Ok(status));
        }
        assert_eq!(ProjectStatus::from_value("archived"), ProjectStatus::Active);
        assert_eq!("".parse::<ProjectStatus>(), Ok(ProjectStatus::Active));
        assert_eq!(ProjectStatus::OnHold.label(), "On Hold");
    }

    #[test]
    fn test_project_serializes_camel_case() {
        let project = Project::create(7, &form("Docs"), now()).unwrap();
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["createdAt"], "2024-05-01T12:00:00Z");
        assert_eq!(value["status"], "active");
    }

    /// One user action on the projects page
    #[derive(Debug, Clone)]
    enum Op {
        Create(&'static str),
        Inline(u32, &'static str),
        Drawer(u32, ProjectStatus),
        Delete(u32),
        DeleteIntent(u32),
    }

    /// Drive the page state machine the way the UI does
    fn run_through_session(ops: &[Op]) -> Collection<Project> {
        let mut projects = Collection::new();
        let mut ids = IdAllocator::new();
        let mut session: EditSession<Project> = EditSession::new();
        for op in ops {
            match op {
                Op::Create(name) => {
                    let _ = projects.create(&mut ids, &form(name), now());
                }
                Op::Inline(id, name) => {
                    if let Some(project) = projects.get(*id).cloned() {
                        session.start_inline(&project).unwrap();
                        session.update_draft(|d| d.name = name.to_string());
                        session.commit(&mut projects).unwrap();
                    }
                }
                Op::Drawer(id, status) => {
                    if let Some(project) = projects.get(*id).cloned() {
                        session.open_modal(&project).unwrap();
                        session.update_draft(|d| d.status = *status);
                        session.commit(&mut projects).unwrap();
                    }
                }
                Op::Delete(id) => {
                    session.request_delete(*id).unwrap();
                    let _ = session.confirm_delete(&mut projects);
                }
                Op::DeleteIntent(id) => {
                    session.request_delete(*id).unwrap();
                    session.cancel();
                }
            }
        }
        projects
    }

    /// Apply the same actions directly to a plain list
    fn run_directly(ops: &[Op]) -> Vec<Project> {
        let mut projects: Vec<Project> = Vec::new();
        let mut next_id = 1;
        for op in ops {
            match op {
                Op::Create(name) if !name.trim().is_empty() => {
                    projects.push(Project::create(next_id, &form(name), now()).unwrap());
                    next_id += 1;
                }
                Op::Create(_) | Op::DeleteIntent(_) => {}
                Op::Inline(id, name) => {
                    if let Some(p) = projects.iter_mut().find(|p| p.id == *id) {
                        p.name = name.to_string();
                    }
                }
                Op::Drawer(id, status) => {
                    if let Some(p) = projects.iter_mut().find(|p| p.id == *id) {
                        p.status = *status;
                    }
                }
                Op::Delete(id) => projects.retain(|p| p.id != *id),
            }
        }
        projects
    }

    #[test]
    fn test_operation_sequences_are_deterministic() {
        let scripts: Vec<Vec<Op>> = vec![
            vec![Op::Create("A"), Op::Create("B"), Op::Inline(1, "A2"), Op::Delete(2), Op::Create("C")],
            vec![Op::Create(""), Op::Create("X"), Op::DeleteIntent(1), Op::Drawer(1, ProjectStatus::OnHold)],
            vec![
                Op::Create("one"),
                Op::Create("two"),
                Op::Create("three"),
                Op::Delete(1),
                Op::Inline(3, "THREE"),
                Op::Drawer(2, ProjectStatus::Completed),
                Op::Delete(9),
                Op::Create("four"),
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
