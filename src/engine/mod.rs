//! # Resource Operations Engine
//!
//! CRUD and relational-query operations over one schema's entity store.
//!
//! The engine owns the store. Callers serialize access to it (the HTTP
//! layer holds it behind one lock), so every operation runs to completion
//! before the next one starts.
//!
//! Ids are compared as opaque strings: a path id matches a record only
//! when the text is identical.

mod actors;
mod dependents;
mod errors;
mod roles;

pub use errors::{EngineError, EngineResult};
pub use roles::{ActorRole, PrimaryRole, SecondaryRole};

use crate::schema::Schema;
use crate::store::{EntityStore, IdentityAllocator};

pub struct ResourceEngine<S: Schema> {
    store: EntityStore<S>,
    ids: IdentityAllocator,
}

impl<S: Schema> ResourceEngine<S> {
    pub fn new(store: EntityStore<S>) -> Self {
        Self {
            store,
            ids: IdentityAllocator::new(),
        }
    }

    pub fn store(&self) -> &EntityStore<S> {
        &self.store
    }
}

impl<S: Schema> Default for ResourceEngine<S> {
    fn default() -> Self {
        Self::new(EntityStore::new())
    }
}

/// Plain-text confirmation returned by deletes
pub fn deletion_message(label: &str, id: &str) -> String {
    format!("{} {} was deleted!", label, id)
}
