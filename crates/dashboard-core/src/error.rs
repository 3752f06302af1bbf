//! Domain Errors
//!
//! None of these are fatal: the UI logs them and keeps its previous state.

use std::fmt;

/// Rejected transitions of an [`EditSession`](crate::EditSession)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// A modal buffer holds changes that were neither saved nor cancelled
    UnsavedChanges,
    /// A delete is waiting for confirmation
    DeletePending,
    /// Commit requested while no inline or modal edit is open
    NothingToCommit,
    /// Confirm requested while no delete is pending
    NoPendingDelete,
    /// The record being edited is no longer in the collection
    RecordMissing,
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::UnsavedChanges => write!(f, "the open editor has unsaved changes"),
            EditError::DeletePending => write!(f, "a delete is waiting for confirmation"),
            EditError::NothingToCommit => write!(f, "no edit is open"),
            EditError::NoPendingDelete => write!(f, "no delete is pending"),
            EditError::RecordMissing => write!(f, "record not found"),
        }
    }
}

impl std::error::Error for EditError {}

/// Create-form validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateError {
    EmptyName,
}

impl fmt::Display for CreateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateError::EmptyName => write!(f, "name is required"),
        }
    }
}

impl std::error::Error for CreateError {}

/// Login form field, used to attach validation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

impl fmt::Display for LoginField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginField::Username => write!(f, "Username"),
            LoginField::Password => write!(f, "Password"),
        }
    }
}

/// Mock login failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// The form itself is malformed (length limits)
    Invalid { field: LoginField, reason: String },
    /// Well-formed, but not the demo credentials. Never says which field was wrong.
    Mismatch,
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::Invalid { field, reason } => write!(f, "{} {}", field, reason),
            LoginError::Mismatch => write!(f, "Invalid credentials"),
        }
    }
}

impl std::error::Error for LoginError {}
