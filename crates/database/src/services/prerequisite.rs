use crate::{
    entities::{
        courses,
        prerequisites::{self, RequiredCourseLink},
    },
    error::{ServiceError, ServiceResult},
    services::records::require,
};
use chrono::Utc;
use log::info;
use models::requisite::PrerequisiteKind;
use petgraph::{algo::has_path_connecting, graphmap::DiGraphMap};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

/// Maintains the prerequisite (correlativas) graph.
///
/// Edges are stored flat, one row per `(course, required_course, kind)`, and
/// resolved to courses by id when read.
pub struct PrerequisiteService;

impl PrerequisiteService {
    /// Adds a `kind` edge making `required_course_id` a prerequisite of `course_id`.
    ///
    /// Rejects self references and edges that would close a cycle among the
    /// edges of the same kind with `InvalidArgument`, unknown courses with
    /// `NotFound` and duplicate edges with `Conflict`.
    pub async fn add_edge<C: ConnectionTrait>(
        db: &C,
        course_id: Uuid,
        required_course_id: Uuid,
        kind: PrerequisiteKind,
    ) -> ServiceResult<prerequisites::Model> {
        if course_id == required_course_id {
            return Err(ServiceError::InvalidArgument(
                "a course cannot be its own prerequisite".to_string(),
            ));
        }

        let course = require::<courses::Entity, _>(db, course_id, "course").await?;
        let required = require::<courses::Entity, _>(db, required_course_id, "course").await?;

        let existing = Self::edges_for(db, course_id, kind).await?;
        if existing
            .iter()
            .any(|edge| edge.required_course_id == required_course_id)
        {
            return Err(ServiceError::Conflict(format!(
                "{} is already a {kind} prerequisite of {}",
                required.name, course.name
            )));
        }

        let same_kind = prerequisites::Entity::find()
            .filter(prerequisites::Column::Kind.eq(kind))
            .all(db)
            .await?;
        let edges = same_kind
            .iter()
            .map(|edge| (edge.course_id, edge.required_course_id));

        if closes_cycle(edges, course_id, required_course_id) {
            return Err(ServiceError::InvalidArgument(format!(
                "making {} a {kind} prerequisite of {} would create a cycle",
                required.name, course.name
            )));
        }

        let position = existing.iter().map(|edge| edge.position).max().unwrap_or(0) + 1;

        let edge = prerequisites::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(course_id),
            required_course_id: Set(required_course_id),
            kind: Set(kind),
            position: Set(position),
            created_at: Set(Utc::now().naive_utc()),
        }
        .insert(db)
        .await?;

        info!(
            "Added {kind} prerequisite {} -> {} ({})",
            course.code, required.code, edge.id
        );
        Ok(edge)
    }

    pub async fn remove_edge<C: ConnectionTrait>(db: &C, edge_id: Uuid) -> ServiceResult<()> {
        let result = prerequisites::Entity::delete_by_id(edge_id)
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("prerequisite", edge_id));
        }

        info!("Removed prerequisite {edge_id}");
        Ok(())
    }

    /// The `kind` edges of a course in insertion order; empty when there are none
    pub async fn edges_for<C: ConnectionTrait>(
        db: &C,
        course_id: Uuid,
        kind: PrerequisiteKind,
    ) -> ServiceResult<Vec<prerequisites::Model>> {
        let edges = prerequisites::Entity::find()
            .filter(prerequisites::Column::CourseId.eq(course_id))
            .filter(prerequisites::Column::Kind.eq(kind))
            .order_by_asc(prerequisites::Column::Position)
            .all(db)
            .await?;

        Ok(edges)
    }

    /// The courses required by `course_id` under `kind`, in edge order
    pub async fn required_courses<C: ConnectionTrait>(
        db: &C,
        course_id: Uuid,
        kind: PrerequisiteKind,
    ) -> ServiceResult<Vec<courses::Model>> {
        let rows = prerequisites::Entity::find()
            .filter(prerequisites::Column::CourseId.eq(course_id))
            .filter(prerequisites::Column::Kind.eq(kind))
            .order_by_asc(prerequisites::Column::Position)
            .find_also_linked(RequiredCourseLink)
            .all(db)
            .await?;

        Ok(rows.into_iter().filter_map(|(_, course)| course).collect())
    }
}

/// Whether adding `course -> required` to `edges` closes a cycle, i.e. whether
/// `required` already (transitively) requires `course`
fn closes_cycle(
    edges: impl IntoIterator<Item = (Uuid, Uuid)>,
    course: Uuid,
    required: Uuid,
) -> bool {
    let graph: DiGraphMap<Uuid, ()> = edges.into_iter().collect();

    graph.contains_node(course)
        && graph.contains_node(required)
        && has_path_connecting(&graph, required, course, None)
}

#[cfg(test)]
mod tests {
    use super::closes_cycle;
    use uuid::Uuid;

    #[test]
    fn test_direct_back_edge_closes_cycle() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        // b requires a, so a requiring b is a cycle
        assert!(closes_cycle([(b, a)], a, b));
    }

    #[test]
    fn test_transitive_cycle() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        // c -> b -> a; adding a -> c closes the loop
        assert!(closes_cycle([(c, b), (b, a)], a, c));
        // adding c -> a is only a shortcut
        assert!(!closes_cycle([(c, b), (b, a)], c, a));
    }

    #[test]
    fn test_unrelated_courses_do_not_cycle() {
        let (a, b, c, d) = (
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        );

        assert!(!closes_cycle([(a, b)], c, d));
        assert!(!closes_cycle(Vec::new(), a, b));
    }
}
