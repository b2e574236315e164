//! Insertion-ordered record collection
//!
//! Lookups are linear scans by id. Order is the order records were
//! appended in and is never rearranged by a mutation.

use crate::schema::Record;

#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    /// All records in insertion order
    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    pub fn append(&mut self, record: T) {
        self.records.push(record);
    }

    /// Replace the record with `id` in place. Returns false if absent.
    pub fn replace_at(&mut self, id: &str, record: T) -> bool {
        match self.position(id) {
            Some(index) => {
                self.records[index] = record;
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`. Returns false if absent.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
