//! Ordered Record Collection
//!
//! In-memory list backing a table. Insertion order is display order; ids are unique.

use crate::entity::Entity;

/// Ordered list of records with unique ids
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from fetched records. Later duplicates of an id are dropped.
    pub fn from_records(records: Vec<T>) -> Self {
        let mut collection = Self::new();
        collection.replace_all(records);
        collection
    }

    /// Replace every record, keeping the first occurrence of each id
    pub fn replace_all(&mut self, records: Vec<T>) {
        self.records.clear();
        for record in records {
            if !self.insert(record) {
                log::warn!("dropping record with duplicate id");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Append a record. Returns false (and leaves the list alone) if the id is taken.
    pub fn insert(&mut self, record: T) -> bool {
        if self.contains(record.id()) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Mutate the record with `id` in place. Returns false if it does not exist.
    pub fn update<F: FnOnce(&mut T)>(&mut self, id: T::Id, f: F) -> bool {
        match self.records.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                f(record);
                true
            }
            None => false,
        }
    }

    /// Remove by id, preserving the order of the rest
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        Some(self.records.remove(index))
    }
}

/// Monotonic id counter for locally created records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdAllocator {
    next: u32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next call to `allocate` will hand out
    pub fn peek(&self) -> u32 {
        self.next
    }

    pub fn allocate(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}
