use crate::{
    entities::{courses, enrollments, students},
    error::ServiceResult,
    services::{prerequisite::PrerequisiteService, records},
};
use log::debug;
use models::requisite::PrerequisiteKind;
use sea_orm::ConnectionTrait;
use uuid::Uuid;

/// Result of checking a student against the direct prerequisites of a course
#[derive(Debug, Clone, PartialEq)]
pub struct Eligibility {
    pub satisfied: bool,
    /// Unmet required courses, in edge order
    pub missing: Vec<courses::Model>,
}

impl Eligibility {
    pub fn missing_names(&self) -> String {
        self.missing
            .iter()
            .map(|course| course.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub struct EligibilityService;

impl EligibilityService {
    /// Checks only the direct `kind` prerequisites of `course_id`; chains are
    /// not followed. Never writes.
    pub async fn evaluate<C: ConnectionTrait>(
        db: &C,
        student_id: Uuid,
        course_id: Uuid,
        kind: PrerequisiteKind,
    ) -> ServiceResult<Eligibility> {
        let required = PrerequisiteService::required_courses(db, course_id, kind).await?;
        if required.is_empty() {
            return Ok(Eligibility {
                satisfied: true,
                missing: vec![],
            });
        }

        let course_ids = required.iter().map(|course| course.id).collect();
        let history = records::enrollments_in(db, student_id, course_ids).await?;

        let missing: Vec<courses::Model> = required
            .into_iter()
            .filter(|course| !has_passed(&history, course.id, kind))
            .collect();

        debug!(
            "Student {student_id} {kind} eligibility for {course_id}: {} missing",
            missing.len()
        );

        Ok(Eligibility {
            satisfied: missing.is_empty(),
            missing,
        })
    }

    /// Like [`EligibilityService::evaluate`], but first resolves both ids so
    /// unknown students or courses surface as `NotFound`
    pub async fn evaluate_eligibility<C: ConnectionTrait>(
        db: &C,
        student_id: Uuid,
        course_id: Uuid,
        kind: PrerequisiteKind,
    ) -> ServiceResult<Eligibility> {
        records::require::<students::Entity, _>(db, student_id, "student").await?;
        records::require::<courses::Entity, _>(db, course_id, "course").await?;

        Self::evaluate(db, student_id, course_id, kind).await
    }
}

fn has_passed(history: &[enrollments::Model], course_id: Uuid, kind: PrerequisiteKind) -> bool {
    history
        .iter()
        .any(|record| record.course_id == course_id && record.status.counts_for(kind))
}
