//! Classroom schema: students, teachers, and graded tests.
//!
//! A test carries a question list. Clients send it as serialized JSON
//! text in the `questions` field; it is stored and returned as a JSON
//! array. The shape of each question is left to the client.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    actor_record, ActorFields, DependentRecord, PayloadError, PayloadResult, Record, Schema,
    SchemaKind,
};
use crate::store::ForeignKey;

pub struct Classroom;

impl Schema for Classroom {
    const KIND: SchemaKind = SchemaKind::Classroom;

    type Primary = Student;
    type Secondary = Teacher;
    type Dependent = Test;
}

actor_record! {
    Student {
        label: "Student",
        collection: "students",
        segment: "student",
        field: name,
        fields: NameFields,
    }
}

actor_record! {
    Teacher {
        label: "Teacher",
        collection: "teachers",
        segment: "teacher",
        field: name,
        fields: NameFields,
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameFields {
    #[serde(default)]
    pub name: Option<String>,
}

impl ActorFields for NameFields {
    fn into_display_name(self) -> Option<String> {
        self.name
    }
}

/// A test a teacher sets for a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    #[serde(deserialize_with = "crate::store::record_id::deserialize")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default)]
    pub questions: Vec<Value>,
    pub student: ForeignKey,
    pub teacher: ForeignKey,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    /// Serialized question list; any other JSON type is rejected later
    #[serde(default)]
    pub questions: Option<Value>,
}

/// Writable test fields. A client-supplied `id`, the foreign keys, and
/// any unknown key are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    /// Serialized question list; any other JSON type is rejected later
    #[serde(default)]
    pub questions: Option<Value>,
}

/// Decode a serialized question list.
///
/// `raw` must be a string holding a JSON array. Array elements are kept
/// as given.
pub fn parse_questions(raw: Value) -> PayloadResult<Vec<Value>> {
    let malformed = |source: serde_json::Error| PayloadError::Malformed {
        field: "questions",
        source,
    };
    let text: String = serde_json::from_value(raw).map_err(malformed)?;
    serde_json::from_str(&text).map_err(malformed)
}

impl Record for Test {
    const LABEL: &'static str = "Test";
    const COLLECTION: &'static str = "tests";
    const SEGMENT: &'static str = "test";

    fn id(&self) -> &str {
        &self.id
    }
}

impl DependentRecord for Test {
    type Draft = TestDraft;
    type Patch = TestPatch;

    fn build(
        id: String,
        primary: ForeignKey,
        secondary: ForeignKey,
        draft: TestDraft,
    ) -> PayloadResult<Self> {
        let questions = match draft.questions {
            Some(raw) => parse_questions(raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            id,
            title: draft.title,
            subject: draft.subject,
            questions,
            student: primary,
            teacher: secondary,
        })
    }

    fn apply(&mut self, patch: TestPatch) -> PayloadResult<()> {
        // Decode first so a bad payload leaves every field untouched
        let questions = patch.questions.map(parse_questions).transpose()?;

        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(subject) = patch.subject {
            self.subject = Some(subject);
        }
        if let Some(questions) = questions {
            self.questions = questions;
        }
        Ok(())
    }

    fn primary_key(&self) -> &ForeignKey {
        &self.student
    }

    fn secondary_key(&self) -> &ForeignKey {
        &self.teacher
    }
}
