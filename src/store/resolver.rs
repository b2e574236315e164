//! Relational lookups from dependent records to actors

use crate::schema::DependentRecord;

/// Which actor reference of a dependent record to follow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorSide {
    Primary,
    Secondary,
}

impl ActorSide {
    fn key_of<D: DependentRecord>(self, record: &D) -> &crate::store::ForeignKey {
        match self {
            ActorSide::Primary => record.primary_key(),
            ActorSide::Secondary => record.secondary_key(),
        }
    }
}

/// Dependent records whose `side` foreign key loosely equals `actor_id`,
/// in their original order.
pub fn filter_by_actor<'a, D: DependentRecord>(
    records: &'a [D],
    side: ActorSide,
    actor_id: &'a str,
) -> impl Iterator<Item = &'a D> + 'a {
    records
        .iter()
        .filter(move |record| side.key_of(*record).matches(actor_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Task;
    use serde_json::json;

    fn tasks() -> Vec<Task> {
        serde_json::from_value(json!([
            {"id": "1", "title": "a", "forester": 1, "supervisor": 10},
            {"id": "2", "title": "b", "forester": 2, "supervisor": 10},
            {"id": "3", "title": "c", "forester": 1, "supervisor": 20},
            {"id": "4", "title": "d", "forester": "x-1", "supervisor": 20}
        ]))
        .unwrap()
    }

    fn ids<'a>(found: impl Iterator<Item = &'a Task>) -> Vec<&'a str> {
        found.map(|task| task.id.as_str()).collect()
    }

    #[test]
    fn test_filter_by_primary_preserves_order() {
        let tasks = tasks();
        assert_eq!(ids(filter_by_actor(&tasks, ActorSide::Primary, "1")), vec!["1", "3"]);
        assert_eq!(ids(filter_by_actor(&tasks, ActorSide::Primary, "x-1")), vec!["4"]);
    }

    #[test]
    fn test_filter_by_secondary() {
        let tasks = tasks();
        assert_eq!(
            ids(filter_by_actor(&tasks, ActorSide::Secondary, "20")),
            vec!["3", "4"]
        );
        assert!(filter_by_actor(&tasks, ActorSide::Secondary, "30").next().is_none());
    }
}
