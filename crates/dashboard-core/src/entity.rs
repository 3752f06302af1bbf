//! Core Entity Trait
//!
//! Every record held in a [`Collection`](crate::Collection) has a stable identifier.

use std::fmt::Debug;
use std::hash::Hash;

/// Core trait for list records
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the record's unique identifier
    type Id: Copy + Eq + Hash + Debug + Send + Sync;

    /// Returns the record's unique identifier
    fn id(&self) -> Self::Id;
}
