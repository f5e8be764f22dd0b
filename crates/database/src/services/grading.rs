use crate::{
    entities::{course_chairs, enrollments, exam_registrations, instructors},
    error::{ServiceError, ServiceResult},
    services::records,
};
use chrono::Utc;
use log::{info, warn};
use models::{
    grade::Grade,
    status::{EnrollmentStatus, RegistrationStatus},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, TransactionTrait,
};
use uuid::Uuid;

/// Grade threshold for approving a course through its final exam
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradingPolicy {
    pub passing_grade: Grade,
}

impl Default for GradingPolicy {
    fn default() -> Self {
        Self {
            passing_grade: Grade::DEFAULT_PASSING,
        }
    }
}

/// A graded registration together with the enrollment it may have approved
#[derive(Debug, Clone, PartialEq)]
pub struct GradeRecord {
    pub registration: exam_registrations::Model,
    pub enrollment: enrollments::Model,
}

pub struct GradingService;

impl GradingService {
    /// Records the final-exam grade of a registration. Only a chair of the
    /// enrollment's course may grade it.
    pub async fn record_final_grade<C>(
        db: &C,
        policy: GradingPolicy,
        instructor_id: Uuid,
        registration_id: Uuid,
        grade: i16,
    ) -> ServiceResult<GradeRecord>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let (registration, enrollment) =
            Self::chaired_registration(db, instructor_id, registration_id).await?;

        let grade = Grade::new(grade).map_err(|e| ServiceError::Validation(e.to_string()))?;

        if registration.status != RegistrationStatus::Registered {
            return Err(ServiceError::Conflict(format!(
                "exam registration is already {}",
                registration.status
            )));
        }

        let now = Utc::now().naive_utc();
        let txn = db.begin().await?;

        let mut active = registration.into_active_model();
        active.status = Set(RegistrationStatus::Graded);
        active.grade = Set(Some(grade.value()));
        active.updated_at = Set(now);
        let registration = active.update(&txn).await?;

        let enrollment = if grade.is_passing(policy.passing_grade)
            && enrollment.status.can_transition_to(EnrollmentStatus::Approved)
        {
            let mut active = enrollment.into_active_model();
            active.status = Set(EnrollmentStatus::Approved);
            active.final_grade = Set(Some(grade.value()));
            active.completed_at = Set(Some(now));
            active.updated_at = Set(now);
            active.update(&txn).await?
        } else {
            enrollment
        };

        txn.commit().await?;

        info!(
            "Instructor {instructor_id} graded registration {} with {grade}; enrollment is {}",
            registration.id, enrollment.status
        );
        Ok(GradeRecord {
            registration,
            enrollment,
        })
    }

    /// Marks a registered student as absent from the exam
    pub async fn mark_absent<C: ConnectionTrait>(
        db: &C,
        instructor_id: Uuid,
        registration_id: Uuid,
    ) -> ServiceResult<exam_registrations::Model> {
        let (registration, _) =
            Self::chaired_registration(db, instructor_id, registration_id).await?;

        if registration.status != RegistrationStatus::Registered {
            return Err(ServiceError::Conflict(format!(
                "exam registration is already {}",
                registration.status
            )));
        }

        let mut active = registration.into_active_model();
        active.status = Set(RegistrationStatus::Absent);
        active.updated_at = Set(Utc::now().naive_utc());
        let registration = active.update(db).await?;

        info!("Registration {} marked absent", registration.id);
        Ok(registration)
    }

    /// Resolves a registration and its enrollment, rejecting instructors who
    /// do not chair the course
    async fn chaired_registration<C: ConnectionTrait>(
        db: &C,
        instructor_id: Uuid,
        registration_id: Uuid,
    ) -> ServiceResult<(exam_registrations::Model, enrollments::Model)> {
        let registration = records::require::<exam_registrations::Entity, _>(
            db,
            registration_id,
            "exam registration",
        )
        .await?;
        let enrollment = records::require::<enrollments::Entity, _>(
            db,
            registration.enrollment_id,
            "enrollment",
        )
        .await?;
        records::require::<instructors::Entity, _>(db, instructor_id, "instructor").await?;

        let chairs = course_chairs::Entity::find()
            .filter(course_chairs::Column::CourseId.eq(enrollment.course_id))
            .filter(course_chairs::Column::InstructorId.eq(instructor_id))
            .count(db)
            .await?;
        if chairs == 0 {
            warn!("Instructor {instructor_id} is not a chair of {}", enrollment.course_id);
            return Err(ServiceError::Forbidden(
                "only a chair of the course may grade its finals".to_string(),
            ));
        }

        Ok((registration, enrollment))
    }
}
