//! Row Edit State Machine
//!
//! One list has at most one of: an inline row edit, a detached modal/drawer edit,
//! or a delete waiting for confirmation. Transitions that would lose unsaved modal
//! changes or skip a pending confirmation are rejected.

use std::fmt::Debug;

use crate::collection::Collection;
use crate::entity::Entity;
use crate::error::EditError;

/// A record that can be edited through a detached draft
pub trait Editable: Entity {
    /// Editable fields of the record
    type Draft: Clone + PartialEq + Debug + Send + Sync;

    /// Snapshot the editable fields
    fn draft(&self) -> Self::Draft;

    /// Write a modal/drawer buffer back onto the record
    fn apply_draft(&mut self, draft: Self::Draft);

    /// Write an inline draft back onto the record
    fn apply_inline(&mut self, draft: Self::Draft) {
        self.apply_draft(draft);
    }
}

/// Current interaction of a list
#[derive(Debug, Clone, PartialEq)]
pub enum EditMode<Id, D> {
    None,
    /// Row `id` is being edited in place
    Inline { id: Id, draft: D },
    /// Row `id` is being edited in a modal or drawer; `original` is the snapshot taken on open
    Modal { id: Id, original: D, buffer: D },
    /// Row `id` is waiting for delete confirmation
    PendingDelete(Id),
}

/// Edit state of one list
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession<T: Editable> {
    mode: EditMode<T::Id, T::Draft>,
}

impl<T: Editable> Default for EditSession<T> {
    fn default() -> Self {
        Self { mode: EditMode::None }
    }
}

impl<T: Editable> EditSession<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &EditMode<T::Id, T::Draft> {
        &self.mode
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.mode, EditMode::None)
    }

    pub fn inline_id(&self) -> Option<T::Id> {
        match &self.mode {
            EditMode::Inline { id, .. } => Some(*id),
            _ => None,
        }
    }

    pub fn modal_id(&self) -> Option<T::Id> {
        match &self.mode {
            EditMode::Modal { id, .. } => Some(*id),
            _ => None,
        }
    }

    pub fn pending_delete(&self) -> Option<T::Id> {
        match &self.mode {
            EditMode::PendingDelete(id) => Some(*id),
            _ => None,
        }
    }

    /// The open inline draft or modal buffer
    pub fn draft(&self) -> Option<&T::Draft> {
        match &self.mode {
            EditMode::Inline { draft, .. } => Some(draft),
            EditMode::Modal { buffer, .. } => Some(buffer),
            _ => None,
        }
    }

    /// True when a modal buffer differs from its snapshot
    pub fn is_dirty(&self) -> bool {
        match &self.mode {
            EditMode::Modal { original, buffer, .. } => original != buffer,
            _ => false,
        }
    }

    /// Begin editing `record` in its row. An open inline edit elsewhere is discarded.
    pub fn start_inline(&mut self, record: &T) -> Result<(), EditError> {
        self.ensure_can_switch()?;
        self.mode = EditMode::Inline { id: record.id(), draft: record.draft() };
        Ok(())
    }

    /// Open the detached editor for `record`
    pub fn open_modal(&mut self, record: &T) -> Result<(), EditError> {
        self.ensure_can_switch()?;
        let snapshot = record.draft();
        self.mode = EditMode::Modal { id: record.id(), original: snapshot.clone(), buffer: snapshot };
        Ok(())
    }

    /// Mark `id` for deletion; nothing is removed until [`confirm_delete`](Self::confirm_delete)
    pub fn request_delete(&mut self, id: T::Id) -> Result<(), EditError> {
        self.ensure_can_switch()?;
        self.mode = EditMode::PendingDelete(id);
        Ok(())
    }

    /// Change the open draft. Returns false when nothing is being edited.
    pub fn update_draft<F: FnOnce(&mut T::Draft)>(&mut self, f: F) -> bool {
        match &mut self.mode {
            EditMode::Inline { draft, .. } => {
                f(draft);
                true
            }
            EditMode::Modal { buffer, .. } => {
                f(buffer);
                true
            }
            _ => false,
        }
    }

    /// Write the open draft onto its record and close the editor
    pub fn commit(&mut self, records: &mut Collection<T>) -> Result<T::Id, EditError> {
        let mode = std::mem::replace(&mut self.mode, EditMode::None);
        let (id, applied) = match mode {
            EditMode::Inline { id, draft } => (id, records.update(id, |record| record.apply_inline(draft))),
            EditMode::Modal { id, buffer, .. } => (id, records.update(id, |record| record.apply_draft(buffer))),
            other => {
                self.mode = other;
                return Err(EditError::NothingToCommit);
            }
        };
        if applied {
            log::debug!("committed edit of {:?}", id);
            Ok(id)
        } else {
            log::warn!("edited record {:?} no longer exists", id);
            Err(EditError::RecordMissing)
        }
    }

    /// Close whatever is open without touching the collection
    pub fn cancel(&mut self) {
        if !self.is_idle() {
            log::debug!("cancelled {:?}", self.mode);
        }
        self.mode = EditMode::None;
    }

    /// Remove the record waiting for confirmation
    pub fn confirm_delete(&mut self, records: &mut Collection<T>) -> Result<T, EditError> {
        let id = self.pending_delete().ok_or(EditError::NoPendingDelete)?;
        self.mode = EditMode::None;
        records.remove(id).ok_or(EditError::RecordMissing)
    }

    fn ensure_can_switch(&self) -> Result<(), EditError> {
        match &self.mode {
            EditMode::None => Ok(()),
            EditMode::Inline { id, .. } => {
                log::debug!("discarding inline edit of {:?}", id);
                Ok(())
            }
            EditMode::Modal { .. } if self.is_dirty() => Err(EditError::UnsavedChanges),
            EditMode::Modal { .. } => Ok(()),
            EditMode::PendingDelete(_) => Err(EditError::DeletePending),
        }
    }
}
