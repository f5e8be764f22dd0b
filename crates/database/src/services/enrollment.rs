use crate::{
    entities::{career_courses, courses, departments, enrollments, sections, students},
    error::{ServiceError, ServiceResult},
    services::{eligibility::EligibilityService, records},
};
use chrono::Utc;
use log::{info, warn};
use models::{requisite::PrerequisiteKind, status::EnrollmentStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, SqlErr,
};
use uuid::Uuid;

pub struct EnrollmentService;

impl EnrollmentService {
    /// Enrolls a student in a course, optionally in one of its sections.
    ///
    /// Every check runs before the single insert, so a rejection leaves the
    /// store untouched.
    pub async fn enroll<C: ConnectionTrait>(
        db: &C,
        student_id: Uuid,
        course_id: Uuid,
        section_id: Option<Uuid>,
    ) -> ServiceResult<enrollments::Model> {
        let student = records::require::<students::Entity, _>(db, student_id, "student").await?;
        let course = records::require::<courses::Entity, _>(db, course_id, "course").await?;

        if let Some(section_id) = section_id {
            let section =
                records::require::<sections::Entity, _>(db, section_id, "section").await?;
            if section.course_id != course.id {
                return Err(ServiceError::Validation(format!(
                    "section {} is not a section of {}",
                    section.code, course.name
                )));
            }
        }

        if !Self::is_open_to(db, &student, &course).await? {
            warn!(
                "Student {} rejected from {}: outside of career",
                student.file_number, course.code
            );
            return Err(ServiceError::Forbidden(format!(
                "{} does not belong to your department",
                course.name
            )));
        }

        let eligibility =
            EligibilityService::evaluate(db, student.id, course.id, PrerequisiteKind::Cursada)
                .await?;
        if !eligibility.satisfied {
            warn!(
                "Student {} rejected from {}: missing prerequisites",
                student.file_number, course.code
            );
            return Err(ServiceError::Validation(format!(
                "missing prerequisites: {}",
                eligibility.missing_names()
            )));
        }

        if records::active_enrollment(db, student.id, course.id)
            .await?
            .is_some()
        {
            return Err(ServiceError::Conflict(format!(
                "already enrolled in {}",
                course.name
            )));
        }

        let now = Utc::now().naive_utc();
        let enrollment = enrollments::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(student.id),
            course_id: Set(course.id),
            section_id: Set(section_id),
            status: Set(EnrollmentStatus::Enrolled),
            absences: Set(0),
            final_grade: Set(None),
            enrolled_at: Set(now),
            completed_at: Set(None),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .map_err(|err| match err.sql_err() {
            // A concurrent request won the race past the check above
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                ServiceError::Conflict(format!("already enrolled in {}", course.name))
            }
            _ => err.into(),
        })?;

        info!(
            "Enrolled student {} in {} ({})",
            student.file_number, course.code, enrollment.id
        );
        Ok(enrollment)
    }

    /// Whether the course is part of the student's career, or belongs to a
    /// cross-cutting department open to every career
    async fn is_open_to<C: ConnectionTrait>(
        db: &C,
        student: &students::Model,
        course: &courses::Model,
    ) -> ServiceResult<bool> {
        let department =
            records::require::<departments::Entity, _>(db, course.department_id, "department")
                .await?;
        if department.cross_cutting {
            return Ok(true);
        }

        let in_plan = career_courses::Entity::find()
            .filter(career_courses::Column::CareerId.eq(student.career_id))
            .filter(career_courses::Column::CourseId.eq(course.id))
            .count(db)
            .await?;

        Ok(in_plan > 0)
    }

    /// Moves an enrollment along the status lifecycle on behalf of the
    /// grading collaborator
    pub async fn set_status<C: ConnectionTrait>(
        db: &C,
        enrollment_id: Uuid,
        status: EnrollmentStatus,
    ) -> ServiceResult<enrollments::Model> {
        let enrollment =
            records::require::<enrollments::Entity, _>(db, enrollment_id, "enrollment").await?;

        if !enrollment.status.can_transition_to(status) {
            return Err(ServiceError::Validation(format!(
                "cannot change an enrollment from {} to {status}",
                enrollment.status
            )));
        }

        let previous = enrollment.status;
        let now = Utc::now().naive_utc();
        let mut active = enrollment.into_active_model();
        active.status = Set(status);
        if previous == EnrollmentStatus::Enrolled {
            active.completed_at = Set(Some(now));
        }
        active.updated_at = Set(now);

        let updated = active.update(db).await?;
        info!("Enrollment {enrollment_id} moved from {previous} to {status}");

        Ok(updated)
    }

    /// Adds `count` absences to an in-progress enrollment
    pub async fn record_absences<C: ConnectionTrait>(
        db: &C,
        enrollment_id: Uuid,
        count: u32,
    ) -> ServiceResult<enrollments::Model> {
        let enrollment =
            records::require::<enrollments::Entity, _>(db, enrollment_id, "enrollment").await?;

        if enrollment.status != EnrollmentStatus::Enrolled {
            return Err(ServiceError::Validation(format!(
                "cannot record absences on a {} enrollment",
                enrollment.status
            )));
        }

        let absences = i32::try_from(count)
            .ok()
            .and_then(|count| enrollment.absences.checked_add(count))
            .ok_or_else(|| {
                ServiceError::InvalidArgument(format!("{count} absences is out of range"))
            })?;

        let mut active = enrollment.into_active_model();
        active.absences = Set(absences);
        active.updated_at = Set(Utc::now().naive_utc());

        Ok(active.update(db).await?)
    }

    pub async fn enrollments_of_student<C: ConnectionTrait>(
        db: &C,
        student_id: Uuid,
    ) -> ServiceResult<Vec<enrollments::Model>> {
        records::require::<students::Entity, _>(db, student_id, "student").await?;
        records::student_enrollments(db, student_id).await
    }
}
