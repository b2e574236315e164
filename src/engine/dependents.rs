//! Dependent record operations, including relational lookups.

use super::errors::{EngineError, EngineResult};
use super::{deletion_message, ResourceEngine};
use crate::observability::Event;
use crate::schema::{DependentRecord, Record, Schema};
use crate::store::{filter_by_actor, ActorSide, ForeignKey};

type Dependent<S> = <S as Schema>::Dependent;
type Draft<S> = <<S as Schema>::Dependent as DependentRecord>::Draft;
type Patch<S> = <<S as Schema>::Dependent as DependentRecord>::Patch;

impl<S: Schema> ResourceEngine<S> {
    pub fn list_dependents(&self) -> Vec<Dependent<S>> {
        self.store.dependents().list().to_vec()
    }

    /// Dependent records referencing `actor_id` on the given side
    pub fn dependents_by(&self, side: ActorSide, actor_id: &str) -> Vec<Dependent<S>> {
        filter_by_actor(self.store.dependents().list(), side, actor_id)
            .cloned()
            .collect()
    }

    /// Create a dependent record linking two actors.
    ///
    /// The actor ids are stored as given; they are not checked against
    /// the actor collections.
    pub fn create_dependent(
        &mut self,
        primary_id: &str,
        secondary_id: &str,
        draft: Draft<S>,
    ) -> EngineResult<Dependent<S>> {
        let record = <Dependent<S> as DependentRecord>::build(
            self.ids.allocate(),
            ForeignKey::from_segment(primary_id),
            ForeignKey::from_segment(secondary_id),
            draft,
        )
        .map_err(|err| EngineError::processing(err, None))?;

        self.store.dependents_mut().append(record.clone());

        tracing::info!(
            event = %Event::RecordCreated,
            collection = <Dependent<S> as Record>::COLLECTION,
            id = record.id(),
            primary = primary_id,
            secondary = secondary_id,
            "record created"
        );
        Ok(record)
    }

    /// Apply an allow-listed patch.
    ///
    /// A malformed structured field fails the whole update; the error
    /// carries the unchanged record so it can still be returned.
    pub fn update_dependent(&mut self, id: &str, patch: Patch<S>) -> EngineResult<Dependent<S>> {
        let current = self
            .store
            .dependents()
            .find(id)
            .cloned()
            .ok_or_else(EngineError::not_found::<Dependent<S>>)?;

        let mut updated = current.clone();
        if let Err(err) = updated.apply(patch) {
            tracing::warn!(
                event = %Event::PayloadRejected,
                collection = <Dependent<S> as Record>::COLLECTION,
                id,
                field = err.field(),
                "structured payload rejected"
            );
            return Err(EngineError::processing(err, Some(serde_json::to_value(&current)?)));
        }

        if !self.store.dependents_mut().replace_at(id, updated.clone()) {
            return Err(EngineError::not_found::<Dependent<S>>());
        }
        Ok(updated)
    }

    pub fn delete_dependent(&mut self, id: &str) -> EngineResult<String> {
        if !self.store.dependents_mut().remove(id) {
            return Err(EngineError::not_found::<Dependent<S>>());
        }

        tracing::info!(
            event = %Event::RecordDeleted,
            collection = <Dependent<S> as Record>::COLLECTION,
            id,
            "record deleted"
        );
        Ok(deletion_message(<Dependent<S> as Record>::LABEL, id))
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::{EngineError, PrimaryRole, ResourceEngine};
    use crate::schema::{
        Classroom, Forestry, NicknameFields, TaskDraft, TaskPatch, TestDraft, TestPatch,
    };
    use crate::store::{ActorSide, ForeignKey};
    use serde_json::json;

    fn task_draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: Some(title.to_string()),
        }
    }

    #[test]
    fn test_create_nested_task_starts_with_empty_report() {
        let mut engine = ResourceEngine::<Forestry>::default();
        let task = engine.create_dependent("3", "9", task_draft("Report")).unwrap();

        assert!(!task.id.is_empty());
        assert_eq!(task.report, "");
        assert_eq!(task.forester, ForeignKey::from_segment("3"));
        assert_eq!(task.supervisor, ForeignKey::from_segment("9"));
        assert_eq!(engine.list_dependents(), vec![task]);
    }

    #[test]
    fn test_update_report_leaves_other_fields() {
        let mut engine = ResourceEngine::<Forestry>::default();
        let task = engine.create_dependent("3", "9", task_draft("Report")).unwrap();

        let updated = engine
            .update_dependent(
                &task.id,
                TaskPatch {
                    report: Some("All trees counted".to_string()),
                },
            )
            .unwrap();

        assert_eq!(updated.report, "All trees counted");
        assert_eq!(updated.title, task.title);
        assert_eq!(updated.forester, task.forester);
        assert_eq!(updated.supervisor, task.supervisor);
        assert_eq!(engine.list_dependents(), vec![updated]);
    }

    #[test]
    fn test_dependents_by_actor_sides() {
        let mut engine = ResourceEngine::<Forestry>::default();
        let a = engine.create_dependent("1", "10", task_draft("a")).unwrap();
        let b = engine.create_dependent("2", "10", task_draft("b")).unwrap();
        let c = engine.create_dependent("1", "20", task_draft("c")).unwrap();

        assert_eq!(engine.dependents_by(ActorSide::Primary, "1"), vec![a.clone(), c.clone()]);
        assert_eq!(engine.dependents_by(ActorSide::Secondary, "10"), vec![a, b]);
        assert!(engine.dependents_by(ActorSide::Primary, "3").is_empty());
    }

    #[test]
    fn test_stale_references_survive_actor_deletion() {
        let mut engine = ResourceEngine::<Forestry>::default();
        let forester = engine.create_actor::<PrimaryRole>(NicknameFields {
            nickname: Some("Oak".to_string()),
        });
        let task = engine.create_dependent(&forester.id, "10", task_draft("a")).unwrap();

        engine.delete_actor::<PrimaryRole>(&forester.id).unwrap();

        assert_eq!(engine.dependents_by(ActorSide::Primary, &forester.id), vec![task]);
    }

    #[test]
    fn test_test_update_failure_returns_unchanged_record() {
        let mut engine = ResourceEngine::<Classroom>::default();
        let test = engine
            .create_dependent(
                "1",
                "2",
                TestDraft {
                    title: Some("Quiz".to_string()),
                    subject: Some("Math".to_string()),
                    questions: Some(json!(r#"[{"text": "2 + 2?"}]"#)),
                },
            )
            .unwrap();

        let result = engine.update_dependent(
            &test.id,
            TestPatch {
                title: Some("Renamed".to_string()),
                subject: None,
                questions: Some(json!("{broken")),
            },
        );

        match result {
            Err(EngineError::Processing { current, message }) => {
                assert_eq!(current, Some(serde_json::to_value(&test).unwrap()));
                assert!(message.contains("questions"));
            }
            other => panic!("expected processing failure, got {:?}", other.map(|_| ())),
        }
        assert_eq!(engine.list_dependents(), vec![test]);
    }

    #[test]
    fn test_create_with_malformed_questions_stores_nothing() {
        let mut engine = ResourceEngine::<Classroom>::default();
        let result = engine.create_dependent(
            "1",
            "2",
            TestDraft {
                questions: Some(json!("nope")),
                ..Default::default()
            },
        );

        assert!(matches!(
            result,
            Err(EngineError::Processing { current: None, .. })
        ));
        assert!(engine.list_dependents().is_empty());
    }

    #[test]
    fn test_delete_dependent() {
        let mut engine = ResourceEngine::<Forestry>::default();
        let task = engine.create_dependent("1", "2", task_draft("a")).unwrap();

        assert_eq!(
            engine.delete_dependent(&task.id).unwrap(),
            format!("Task {} was deleted!", task.id)
        );
        assert!(matches!(
            engine.delete_dependent(&task.id),
            Err(EngineError::NotFound { label: "Task" })
        ));
        assert!(engine
            .update_dependent(&task.id, TaskPatch::default())
            .is_err());
    }
}
