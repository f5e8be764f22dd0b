mod common;

use common::{Campus, enrollment, exam_session, instructor, make_chair, setup};
use database::{
    ServiceError,
    entities::{enrollments, exam_registrations},
    services::{
        final_exam::FinalExamService,
        grading::{GradingPolicy, GradingService},
    },
};
use models::status::{EnrollmentStatus, RegistrationStatus};
use sea_orm::{DatabaseConnection, EntityTrait};

struct Exam {
    campus: Campus,
    chair: uuid::Uuid,
    enrollment: enrollments::Model,
    registration: exam_registrations::Model,
}

async fn registered_exam(db: &DatabaseConnection) -> Exam {
    let campus = Campus::new(db).await;
    let course = campus.course(db, "SI-101", "Algorithms").await;
    let chair = instructor(db, "Ada Lovelace").await;
    make_chair(db, course.id, chair.id).await;

    let session = exam_session(db, course.id).await;
    let enrollment = enrollment(db, campus.student.id, course.id, EnrollmentStatus::Completed).await;
    let registration = FinalExamService::register(db, campus.student.id, enrollment.id, session.id)
        .await
        .unwrap();

    Exam {
        campus,
        chair: chair.id,
        enrollment,
        registration,
    }
}

#[tokio::test]
async fn test_passing_grade_approves_the_enrollment() {
    let db = setup().await;
    let exam = registered_exam(&db).await;

    let record = GradingService::record_final_grade(
        &db,
        GradingPolicy::default(),
        exam.chair,
        exam.registration.id,
        7,
    )
    .await
    .unwrap();

    assert_eq!(record.registration.status, RegistrationStatus::Graded);
    assert_eq!(record.registration.grade, Some(7));
    assert_eq!(record.enrollment.status, EnrollmentStatus::Approved);
    assert_eq!(record.enrollment.final_grade, Some(7));

    let stored = enrollments::Entity::find_by_id(exam.enrollment.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, EnrollmentStatus::Approved);
    assert_eq!(stored.student_id, exam.campus.student.id);
}

#[tokio::test]
async fn test_failing_grade_keeps_the_cursada() {
    let db = setup().await;
    let exam = registered_exam(&db).await;

    let record = GradingService::record_final_grade(
        &db,
        GradingPolicy::default(),
        exam.chair,
        exam.registration.id,
        2,
    )
    .await
    .unwrap();

    assert_eq!(record.registration.status, RegistrationStatus::Graded);
    assert_eq!(record.enrollment.status, EnrollmentStatus::Completed);
    assert_eq!(record.enrollment.final_grade, None);

    // A graded registration cannot be graded again
    let err = GradingService::record_final_grade(
        &db,
        GradingPolicy::default(),
        exam.chair,
        exam.registration.id,
        8,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[tokio::test]
async fn test_grade_must_be_in_range() {
    let db = setup().await;
    let exam = registered_exam(&db).await;

    for grade in [-1, 11] {
        let err = GradingService::record_final_grade(
            &db,
            GradingPolicy::default(),
            exam.chair,
            exam.registration.id,
            grade,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    let stored = exam_registrations::Entity::find_by_id(exam.registration.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, RegistrationStatus::Registered);
}

#[tokio::test]
async fn test_only_chairs_may_grade() {
    let db = setup().await;
    let exam = registered_exam(&db).await;
    let assistant = instructor(&db, "Charles Babbage").await;

    let err = GradingService::record_final_grade(
        &db,
        GradingPolicy::default(),
        assistant.id,
        exam.registration.id,
        9,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Forbidden(_)));

    let err = GradingService::mark_absent(&db, assistant.id, exam.registration.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Forbidden(_)));
}

#[tokio::test]
async fn test_mark_absent() {
    let db = setup().await;
    let exam = registered_exam(&db).await;

    let registration = GradingService::mark_absent(&db, exam.chair, exam.registration.id)
        .await
        .unwrap();
    assert_eq!(registration.status, RegistrationStatus::Absent);

    let err = GradingService::mark_absent(&db, exam.chair, exam.registration.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}
