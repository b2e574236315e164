//! The entity store: the three collections of one schema.

use std::collections::BTreeMap;

use serde::Serialize;

use super::collection::Collection;
use crate::schema::{Record, Schema, SchemaKind};

/// In-memory state of one deployment.
///
/// Constructed once at startup (empty or from a snapshot) and owned by
/// the resource engine. Nothing is ever written back to disk.
pub struct EntityStore<S: Schema> {
    primaries: Collection<S::Primary>,
    secondaries: Collection<S::Secondary>,
    dependents: Collection<S::Dependent>,
}

impl<S: Schema> EntityStore<S> {
    pub fn new() -> Self {
        Self::from_collections(Collection::new(), Collection::new(), Collection::new())
    }

    pub fn from_collections(
        primaries: Collection<S::Primary>,
        secondaries: Collection<S::Secondary>,
        dependents: Collection<S::Dependent>,
    ) -> Self {
        Self {
            primaries,
            secondaries,
            dependents,
        }
    }

    pub fn primaries(&self) -> &Collection<S::Primary> {
        &self.primaries
    }

    pub fn primaries_mut(&mut self) -> &mut Collection<S::Primary> {
        &mut self.primaries
    }

    pub fn secondaries(&self) -> &Collection<S::Secondary> {
        &self.secondaries
    }

    pub fn secondaries_mut(&mut self) -> &mut Collection<S::Secondary> {
        &mut self.secondaries
    }

    pub fn dependents(&self) -> &Collection<S::Dependent> {
        &self.dependents
    }

    pub fn dependents_mut(&mut self) -> &mut Collection<S::Dependent> {
        &mut self.dependents
    }

    /// Record counts per collection
    pub fn summary(&self) -> StoreSummary {
        let mut collections = BTreeMap::new();
        collections.insert(S::Primary::COLLECTION, self.primaries.len());
        collections.insert(S::Secondary::COLLECTION, self.secondaries.len());
        collections.insert(S::Dependent::COLLECTION, self.dependents.len());

        StoreSummary {
            schema: S::KIND,
            collections,
        }
    }
}

impl<S: Schema> Default for EntityStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSummary {
    pub schema: SchemaKind,
    pub collections: BTreeMap<&'static str, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ActorRecord, Classroom, Student};

    #[test]
    fn test_new_store_is_empty() {
        let store: EntityStore<Classroom> = EntityStore::new();
        assert!(store.primaries().is_empty());
        assert!(store.secondaries().is_empty());
        assert!(store.dependents().is_empty());
    }

    #[test]
    fn test_summary_counts_by_collection_name() {
        let mut store: EntityStore<Classroom> = EntityStore::new();
        store
            .primaries_mut()
            .append(Student::new("s-1".to_string(), Some("Ann".to_string())));

        let summary = store.summary();
        assert_eq!(summary.schema, SchemaKind::Classroom);
        assert_eq!(summary.collections["students"], 1);
        assert_eq!(summary.collections["teachers"], 0);
        assert_eq!(summary.collections["tests"], 0);
    }
}
