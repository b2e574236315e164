//! In-memory entity store
//!
//! Holds the three insertion-ordered collections of a schema, the
//! identity allocator for new records, and the relational resolver used
//! to follow foreign keys. State lives for the process lifetime and is
//! never persisted.

mod collection;
mod entity_store;
mod errors;
mod identity;
mod keys;
mod resolver;
pub mod snapshot;

pub use collection::Collection;
pub use entity_store::{EntityStore, StoreSummary};
pub use errors::{StoreError, StoreResult};
pub use identity::IdentityAllocator;
pub use keys::{record_id, ForeignKey};
pub use resolver::{filter_by_actor, ActorSide};
