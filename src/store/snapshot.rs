//! Snapshot seeding
//!
//! A snapshot is a JSON object keyed by collection name:
//!
//! ```json
//! {
//!   "foresters": [{"id": 1, "nickname": "Oak"}],
//!   "supervisors": [],
//!   "tasks": []
//! }
//! ```
//!
//! A missing key seeds an empty collection. Keys of other schemas are
//! ignored. Snapshots are read once at startup and never written.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use super::collection::Collection;
use super::entity_store::EntityStore;
use super::errors::{StoreError, StoreResult};
use crate::schema::{Record, Schema};

/// Load a snapshot file into a fresh store
pub fn load<S: Schema>(path: &Path) -> StoreResult<EntityStore<S>> {
    let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&content).map_err(StoreError::InvalidJson)?;
    from_value(value)
}

/// Build a store from an already-parsed snapshot document
pub fn from_value<S: Schema>(value: Value) -> StoreResult<EntityStore<S>> {
    let Value::Object(mut root) = value else {
        return Err(StoreError::NotAnObject);
    };

    Ok(EntityStore::from_collections(
        take_collection(&mut root)?,
        take_collection(&mut root)?,
        take_collection(&mut root)?,
    ))
}

fn take_collection<T: Record>(root: &mut Map<String, Value>) -> StoreResult<Collection<T>> {
    let Some(raw) = root.remove(T::COLLECTION) else {
        return Ok(Collection::new());
    };

    let records: Vec<T> =
        serde_json::from_value(raw).map_err(|source| StoreError::InvalidCollection {
            collection: T::COLLECTION,
            source,
        })?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        if !seen.insert(record.id()) {
            return Err(StoreError::DuplicateId {
                collection: T::COLLECTION,
                id: record.id().to_string(),
            });
        }
    }

    Ok(Collection::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Classroom, Forestry};
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_numeric_ids_become_text() {
        let store: EntityStore<Forestry> = from_value(json!({
            "foresters": [{"id": 1, "nickname": "Oak"}, {"id": "f-2"}],
            "supervisors": [{"id": 10, "nickname": "Elm"}],
            "tasks": [{"id": 100, "title": "Survey", "report": "", "forester": 1, "supervisor": 10}]
        }))
        .unwrap();

        assert_eq!(store.primaries().list()[0].id, "1");
        assert_eq!(store.primaries().list()[1].id, "f-2");
        assert!(store.primaries().list()[1].nickname.is_none());
        assert_eq!(store.dependents().find("100").unwrap().title.as_deref(), Some("Survey"));
    }

    #[test]
    fn test_missing_collections_seed_empty() {
        let store: EntityStore<Classroom> = from_value(json!({
            "students": [{"id": "s-1", "name": "Ann"}],
            "foresters": [{"id": 1}]
        }))
        .unwrap();

        assert_eq!(store.primaries().len(), 1);
        assert!(store.secondaries().is_empty());
        assert!(store.dependents().is_empty());
    }

    #[test]
    fn test_rejects_non_object_root() {
        let result = from_value::<Forestry>(json!([]));
        assert!(matches!(result, Err(StoreError::NotAnObject)));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = from_value::<Forestry>(json!({
            "supervisors": [{"id": 1}, {"id": "1"}]
        }));
        match result {
            Err(StoreError::DuplicateId { collection, id }) => {
                assert_eq!(collection, "supervisors");
                assert_eq!(id, "1");
            }
            _ => panic!("expected duplicate id error"),
        }
    }

    #[test]
    fn test_rejects_malformed_records() {
        let result = from_value::<Forestry>(json!({
            "tasks": [{"id": 1, "title": "no keys"}]
        }));
        assert!(matches!(
            result,
            Err(StoreError::InvalidCollection { collection: "tasks", .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"teachers": [{{"id": "t-1", "name": "Mr. Lee"}}]}}"#).unwrap();

        let store: EntityStore<Classroom> = load(file.path()).unwrap();
        assert_eq!(store.secondaries().list()[0].name.as_deref(), Some("Mr. Lee"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load::<Forestry>(Path::new("/nonexistent/taskdesk/snapshot.json"));
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }
}
