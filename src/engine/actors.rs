//! Actor operations: list, create, read, update, delete.

use super::errors::{EngineError, EngineResult};
use super::roles::ActorRole;
use super::{deletion_message, ResourceEngine};
use crate::observability::Event;
use crate::schema::{merge_display_name, ActorFields, ActorRecord, Record, Schema};

impl<S: Schema> ResourceEngine<S> {
    /// Every actor of the role, in insertion order
    pub fn list_actors<R: ActorRole<S>>(&self) -> Vec<R::Record> {
        R::collection(&self.store).list().to_vec()
    }

    /// Create an actor. A missing display name leaves the record unnamed.
    pub fn create_actor<R: ActorRole<S>>(
        &mut self,
        fields: <R::Record as ActorRecord>::Fields,
    ) -> R::Record {
        let record = R::Record::new(self.ids.allocate(), fields.into_display_name());
        R::collection_mut(&mut self.store).append(record.clone());

        tracing::info!(
            event = %Event::RecordCreated,
            collection = <R::Record as Record>::COLLECTION,
            id = record.id(),
            "record created"
        );
        record
    }

    pub fn read_actor<R: ActorRole<S>>(&self, id: &str) -> EngineResult<R::Record> {
        R::collection(&self.store)
            .find(id)
            .cloned()
            .ok_or_else(EngineError::not_found::<R::Record>)
    }

    /// Merge the display name if present and non-empty
    pub fn update_actor<R: ActorRole<S>>(
        &mut self,
        id: &str,
        fields: <R::Record as ActorRecord>::Fields,
    ) -> EngineResult<R::Record> {
        let mut record = self.read_actor::<R>(id)?;
        merge_display_name(record.display_name_mut(), fields.into_display_name());

        if !R::collection_mut(&mut self.store).replace_at(id, record.clone()) {
            return Err(EngineError::not_found::<R::Record>());
        }
        Ok(record)
    }

    /// Remove an actor. Dependent records keep their stale references.
    pub fn delete_actor<R: ActorRole<S>>(&mut self, id: &str) -> EngineResult<String> {
        if !R::collection_mut(&mut self.store).remove(id) {
            return Err(EngineError::not_found::<R::Record>());
        }

        tracing::info!(
            event = %Event::RecordDeleted,
            collection = <R::Record as Record>::COLLECTION,
            id,
            "record deleted"
        );
        Ok(deletion_message(<R::Record as Record>::LABEL, id))
    }
}
