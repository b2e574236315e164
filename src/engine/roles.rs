//! Actor roles
//!
//! Actor operations are identical for both actor kinds and differ only
//! in the collection they target. A role type selects that collection.

use crate::schema::{ActorRecord, Schema};
use crate::store::{Collection, EntityStore};

pub trait ActorRole<S: Schema>: Send + Sync + 'static {
    type Record: ActorRecord;

    fn collection(store: &EntityStore<S>) -> &Collection<Self::Record>;

    fn collection_mut(store: &mut EntityStore<S>) -> &mut Collection<Self::Record>;
}

/// The tracked actor (forester, student)
pub struct PrimaryRole;

/// The supervising actor (supervisor, teacher)
pub struct SecondaryRole;

impl<S: Schema> ActorRole<S> for PrimaryRole {
    type Record = S::Primary;

    fn collection(store: &EntityStore<S>) -> &Collection<S::Primary> {
        store.primaries()
    }

    fn collection_mut(store: &mut EntityStore<S>) -> &mut Collection<S::Primary> {
        store.primaries_mut()
    }
}

impl<S: Schema> ActorRole<S> for SecondaryRole {
    type Record = S::Secondary;

    fn collection(store: &EntityStore<S>) -> &Collection<S::Secondary> {
        store.secondaries()
    }

    fn collection_mut(store: &mut EntityStore<S>) -> &mut Collection<S::Secondary> {
        store.secondaries_mut()
    }
}
