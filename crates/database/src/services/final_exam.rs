use crate::{
    entities::{courses, enrollments, exam_registrations, exam_sessions},
    error::{ServiceError, ServiceResult},
    services::{eligibility::EligibilityService, records},
};
use chrono::Utc;
use log::{info, warn};
use models::{requisite::PrerequisiteKind, status::RegistrationStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

pub struct FinalExamService;

impl FinalExamService {
    /// Registers the enrollment of `student_id` for a final-exam session
    pub async fn register<C: ConnectionTrait>(
        db: &C,
        student_id: Uuid,
        enrollment_id: Uuid,
        exam_session_id: Uuid,
    ) -> ServiceResult<exam_registrations::Model> {
        let enrollment =
            records::require::<enrollments::Entity, _>(db, enrollment_id, "enrollment").await?;
        if enrollment.student_id != student_id {
            warn!("Student {student_id} tried to register enrollment {enrollment_id}");
            return Err(ServiceError::Forbidden(
                "cannot register for another student's exam".to_string(),
            ));
        }

        if !enrollment.status.allows_final_exam() {
            return Err(ServiceError::Validation(
                "cannot register for a final without having completed the course".to_string(),
            ));
        }

        let session =
            records::require::<exam_sessions::Entity, _>(db, exam_session_id, "exam session")
                .await?;
        if session.course_id != enrollment.course_id {
            return Err(ServiceError::Validation(
                "the exam session belongs to a different course".to_string(),
            ));
        }

        let eligibility = EligibilityService::evaluate(
            db,
            student_id,
            enrollment.course_id,
            PrerequisiteKind::Final,
        )
        .await?;
        if !eligibility.satisfied {
            let course =
                records::require::<courses::Entity, _>(db, enrollment.course_id, "course").await?;
            warn!(
                "Student {student_id} rejected from the {} final: missing prerequisites",
                course.code
            );
            return Err(ServiceError::Validation(format!(
                "missing final prerequisites for {}: {}",
                course.name,
                eligibility.missing_names()
            )));
        }

        let duplicates = exam_registrations::Entity::find()
            .filter(exam_registrations::Column::EnrollmentId.eq(enrollment.id))
            .filter(exam_registrations::Column::ExamSessionId.eq(session.id))
            .count(db)
            .await?;
        if duplicates > 0 {
            return Err(ServiceError::Conflict(
                "already registered for this exam session".to_string(),
            ));
        }

        let now = Utc::now().naive_utc();
        let registration = exam_registrations::ActiveModel {
            id: Set(Uuid::new_v4()),
            enrollment_id: Set(enrollment.id),
            exam_session_id: Set(session.id),
            status: Set(RegistrationStatus::Registered),
            grade: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await?;

        info!(
            "Registered enrollment {} for exam session {} on {}",
            enrollment.id, session.id, session.date
        );
        Ok(registration)
    }
}
