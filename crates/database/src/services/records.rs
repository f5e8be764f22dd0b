//! Entity lookups and filtered queries shared by the workflows.

use crate::{
    entities::enrollments,
    error::{ServiceError, ServiceResult},
};
use models::status::EnrollmentStatus;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PrimaryKeyTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Fetches an entity by id, mapping absence to [`ServiceError::NotFound`]
pub async fn require<E, C>(db: &C, id: Uuid, entity: &'static str) -> ServiceResult<E::Model>
where
    E: EntityTrait,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    E::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(entity, id))
}

/// All of a student's enrollment records for any of `course_ids`
pub async fn enrollments_in<C: ConnectionTrait>(
    db: &C,
    student_id: Uuid,
    course_ids: Vec<Uuid>,
) -> ServiceResult<Vec<enrollments::Model>> {
    if course_ids.is_empty() {
        return Ok(vec![]);
    }

    let records = enrollments::Entity::find()
        .filter(enrollments::Column::StudentId.eq(student_id))
        .filter(enrollments::Column::CourseId.is_in(course_ids))
        .all(db)
        .await?;

    Ok(records)
}

/// The student's in-progress (`enrolled`) record for a course, if any
pub async fn active_enrollment<C: ConnectionTrait>(
    db: &C,
    student_id: Uuid,
    course_id: Uuid,
) -> ServiceResult<Option<enrollments::Model>> {
    let record = enrollments::Entity::find()
        .filter(enrollments::Column::StudentId.eq(student_id))
        .filter(enrollments::Column::CourseId.eq(course_id))
        .filter(enrollments::Column::Status.eq(EnrollmentStatus::Enrolled))
        .one(db)
        .await?;

    Ok(record)
}

/// Every enrollment record of a student, oldest first
pub async fn student_enrollments<C: ConnectionTrait>(
    db: &C,
    student_id: Uuid,
) -> ServiceResult<Vec<enrollments::Model>> {
    let records = enrollments::Entity::find()
        .filter(enrollments::Column::StudentId.eq(student_id))
        .order_by_asc(enrollments::Column::EnrolledAt)
        .all(db)
        .await?;

    Ok(records)
}
