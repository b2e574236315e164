//! Forestry schema: foresters, their supervisors, and field tasks.

use serde::{Deserialize, Serialize};

use super::{actor_record, ActorFields, DependentRecord, PayloadResult, Record, Schema, SchemaKind};
use crate::store::ForeignKey;

pub struct Forestry;

impl Schema for Forestry {
    const KIND: SchemaKind = SchemaKind::Forestry;

    type Primary = Forester;
    type Secondary = Supervisor;
    type Dependent = Task;
}

actor_record! {
    /// Forester doing field work
    Forester {
        label: "Forester",
        collection: "foresters",
        segment: "forester",
        field: nickname,
        fields: NicknameFields,
    }
}

actor_record! {
    /// Supervisor handing out tasks
    Supervisor {
        label: "Supervisor",
        collection: "supervisors",
        segment: "supervisor",
        field: nickname,
        fields: NicknameFields,
    }
}

/// Create/update body for foresters and supervisors
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NicknameFields {
    #[serde(default)]
    pub nickname: Option<String>,
}

impl ActorFields for NicknameFields {
    fn into_display_name(self) -> Option<String> {
        self.nickname
    }
}

/// A task assigned by a supervisor to a forester.
///
/// `report` starts empty and is filled in by later updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "crate::store::record_id::deserialize")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub report: String,
    pub forester: ForeignKey,
    pub supervisor: ForeignKey,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskDraft {
    #[serde(default)]
    pub title: Option<String>,
}

/// Only the report is writable after creation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    #[serde(default)]
    pub report: Option<String>,
}

impl Record for Task {
    const LABEL: &'static str = "Task";
    const COLLECTION: &'static str = "tasks";
    const SEGMENT: &'static str = "task";

    fn id(&self) -> &str {
        &self.id
    }
}

impl DependentRecord for Task {
    type Draft = TaskDraft;
    type Patch = TaskPatch;

    fn build(
        id: String,
        primary: ForeignKey,
        secondary: ForeignKey,
        draft: TaskDraft,
    ) -> PayloadResult<Self> {
        Ok(Self {
            id,
            title: draft.title,
            report: String::new(),
            forester: primary,
            supervisor: secondary,
        })
    }

    fn apply(&mut self, patch: TaskPatch) -> PayloadResult<()> {
        if let Some(report) = patch.report {
            self.report = report;
        }
        Ok(())
    }

    fn primary_key(&self) -> &ForeignKey {
        &self.forester
    }

    fn secondary_key(&self) -> &ForeignKey {
        &self.supervisor
    }
}
