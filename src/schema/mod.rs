//! Record schemas served by the resource engine
//!
//! A schema names three record kinds and the path segments used to reach
//! them:
//! - a primary actor (the actor being tracked)
//! - a secondary actor (the actor supervising or evaluating it)
//! - a dependent record referencing one of each by foreign key
//!
//! Two schemas ship with the crate: [`Forestry`] and [`Classroom`].
//! Everything above this module is generic over [`Schema`], so adding a
//! third deployment shape means adding record types here, not new routes.

mod classroom;
mod errors;
mod forestry;

pub use classroom::{parse_questions, Classroom, NameFields, Student, Teacher, Test, TestDraft, TestPatch};
pub use errors::{PayloadError, PayloadResult};
pub use forestry::{Forester, Forestry, NicknameFields, Supervisor, Task, TaskDraft, TaskPatch};

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::store::ForeignKey;

/// A record held in one of the store's collections.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Label used in failure and confirmation messages ("Forester")
    const LABEL: &'static str;
    /// Collection name, used as path segment and snapshot key ("foresters")
    const COLLECTION: &'static str;
    /// Singular segment used by relational routes ("forester")
    const SEGMENT: &'static str;

    /// Opaque record id
    fn id(&self) -> &str;
}

/// An actor: an id plus an optional display name.
pub trait ActorRecord: Record {
    /// Request body accepted on create and update
    type Fields: ActorFields;

    fn new(id: String, display_name: Option<String>) -> Self;

    fn display_name(&self) -> Option<&str>;

    fn display_name_mut(&mut self) -> &mut Option<String>;
}

/// Allow-listed request body for actor create/update.
pub trait ActorFields: DeserializeOwned + Default + Send + 'static {
    fn into_display_name(self) -> Option<String>;
}

/// A record referencing one primary and one secondary actor.
///
/// Foreign keys are stored as supplied and never checked against the
/// actor collections.
pub trait DependentRecord: Record {
    /// Body accepted by nested create
    type Draft: DeserializeOwned + Default + Send + 'static;
    /// Allow-listed body accepted by update; unknown fields are ignored
    type Patch: DeserializeOwned + Default + Send + 'static;

    fn build(
        id: String,
        primary: ForeignKey,
        secondary: ForeignKey,
        draft: Self::Draft,
    ) -> PayloadResult<Self>;

    /// Apply a patch in place.
    ///
    /// Implementations must validate the whole patch before touching any
    /// field: on error the record is unchanged.
    fn apply(&mut self, patch: Self::Patch) -> PayloadResult<()>;

    fn primary_key(&self) -> &ForeignKey;

    fn secondary_key(&self) -> &ForeignKey;
}

/// A deployment shape: which record types fill the three roles.
pub trait Schema: Send + Sync + 'static {
    const KIND: SchemaKind;

    type Primary: ActorRecord;
    type Secondary: ActorRecord;
    type Dependent: DependentRecord;
}

/// Runtime selector for the schema a server instance serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    /// Foresters, supervisors and tasks
    #[default]
    Forestry,
    /// Students, teachers and tests
    Classroom,
}

impl SchemaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Forestry => "forestry",
            SchemaKind::Classroom => "classroom",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Merge an incoming display name. Absent and empty values do not overwrite.
pub fn merge_display_name(slot: &mut Option<String>, incoming: Option<String>) {
    if let Some(name) = incoming.filter(|name| !name.is_empty()) {
        *slot = Some(name);
    }
}

/// Declares an actor record type with its serde field name for the
/// display name.
macro_rules! actor_record {
    (
        $(#[$meta:meta])*
        $name:ident {
            label: $label:literal,
            collection: $collection:literal,
            segment: $segment:literal,
            field: $field:ident,
            fields: $fields:ty $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            #[serde(deserialize_with = "crate::store::record_id::deserialize")]
            pub id: String,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub $field: Option<String>,
        }

        impl $crate::schema::Record for $name {
            const LABEL: &'static str = $label;
            const COLLECTION: &'static str = $collection;
            const SEGMENT: &'static str = $segment;

            fn id(&self) -> &str {
                &self.id
            }
        }

        impl $crate::schema::ActorRecord for $name {
            type Fields = $fields;

            fn new(id: String, display_name: Option<String>) -> Self {
                Self {
                    id,
                    $field: display_name,
                }
            }

            fn display_name(&self) -> Option<&str> {
                self.$field.as_deref()
            }

            fn display_name_mut(&mut self) -> &mut Option<String> {
                &mut self.$field
            }
        }
    };
}

pub(crate) use actor_record;
