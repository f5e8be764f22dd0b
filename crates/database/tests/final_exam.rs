mod common;

use common::{Campus, enrollment, exam_session, setup};
use database::{
    ServiceError,
    services::{
        enrollment::EnrollmentService, final_exam::FinalExamService,
        prerequisite::PrerequisiteService,
    },
};
use models::{
    requisite::PrerequisiteKind::Final,
    status::{EnrollmentStatus, RegistrationStatus},
};
use uuid::Uuid;

#[tokio::test]
async fn test_register_after_completing_the_course() {
    let db = setup().await;
    let campus = Campus::new(&db).await;
    let course = campus.course(&db, "SI-101", "Algorithms").await;
    let session = exam_session(&db, course.id).await;

    let record = EnrollmentService::enroll(&db, campus.student.id, course.id, None)
        .await
        .unwrap();

    let err = FinalExamService::register(&db, campus.student.id, record.id, session.id)
        .await
        .unwrap_err();
    match err {
        ServiceError::Validation(message) => assert_eq!(
            message,
            "cannot register for a final without having completed the course"
        ),
        other => panic!("expected a validation error, got {other:?}"),
    }

    EnrollmentService::set_status(&db, record.id, EnrollmentStatus::Completed)
        .await
        .unwrap();

    let registration = FinalExamService::register(&db, campus.student.id, record.id, session.id)
        .await
        .unwrap();
    assert_eq!(registration.status, RegistrationStatus::Registered);
    assert_eq!(registration.enrollment_id, record.id);
    assert_eq!(registration.grade, None);
}

#[tokio::test]
async fn test_register_rejects_duplicates() {
    let db = setup().await;
    let campus = Campus::new(&db).await;
    let course = campus.course(&db, "SI-101", "Algorithms").await;
    let session = exam_session(&db, course.id).await;
    let record = enrollment(&db, campus.student.id, course.id, EnrollmentStatus::Completed).await;

    FinalExamService::register(&db, campus.student.id, record.id, session.id)
        .await
        .unwrap();
    let err = FinalExamService::register(&db, campus.student.id, record.id, session.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));

    // Another session of the same course is a separate registration
    let later = exam_session(&db, course.id).await;
    FinalExamService::register(&db, campus.student.id, record.id, later.id)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_register_rejects_another_students_enrollment() {
    let db = setup().await;
    let campus = Campus::new(&db).await;
    let course = campus.course(&db, "SI-101", "Algorithms").await;
    let session = exam_session(&db, course.id).await;
    let record = enrollment(&db, campus.student.id, course.id, EnrollmentStatus::Completed).await;

    let intruder = common::student(&db, campus.career.id, "10002").await;
    let err = FinalExamService::register(&db, intruder.id, record.id, session.id)
        .await
        .unwrap_err();
    match err {
        ServiceError::Forbidden(message) => {
            assert_eq!(message, "cannot register for another student's exam")
        }
        other => panic!("expected a forbidden error, got {other:?}"),
    }

    // Ownership is checked before the session is resolved
    let err = FinalExamService::register(&db, intruder.id, record.id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Forbidden(_)));
}

#[tokio::test]
async fn test_status_is_checked_before_the_session() {
    let db = setup().await;
    let campus = Campus::new(&db).await;
    let course = campus.course(&db, "SI-101", "Algorithms").await;
    let record = enrollment(&db, campus.student.id, course.id, EnrollmentStatus::Enrolled).await;

    let err = FinalExamService::register(&db, campus.student.id, record.id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn test_register_checks_final_prerequisites() {
    let db = setup().await;
    let campus = Campus::new(&db).await;
    let course = campus.course(&db, "SI-301", "Operating Systems").await;
    let required = campus.course(&db, "SI-201", "Computer Architecture").await;
    PrerequisiteService::add_edge(&db, course.id, required.id, Final)
        .await
        .unwrap();

    let session = exam_session(&db, course.id).await;
    let record = enrollment(&db, campus.student.id, course.id, EnrollmentStatus::Completed).await;
    enrollment(&db, campus.student.id, required.id, EnrollmentStatus::Completed).await;

    let err = FinalExamService::register(&db, campus.student.id, record.id, session.id)
        .await
        .unwrap_err();
    match err {
        ServiceError::Validation(message) => assert!(message.contains("Computer Architecture")),
        other => panic!("expected a validation error, got {other:?}"),
    }

    enrollment(&db, campus.student.id, required.id, EnrollmentStatus::Approved).await;
    FinalExamService::register(&db, campus.student.id, record.id, session.id)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_register_resolves_references() {
    let db = setup().await;
    let campus = Campus::new(&db).await;
    let course = campus.course(&db, "SI-101", "Algorithms").await;
    let other = campus.course(&db, "SI-102", "Discrete Math").await;
    let record = enrollment(&db, campus.student.id, course.id, EnrollmentStatus::Completed).await;
    let session = exam_session(&db, course.id).await;

    let err = FinalExamService::register(&db, campus.student.id, Uuid::new_v4(), session.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "enrollment", .. }));

    let err = FinalExamService::register(&db, campus.student.id, record.id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "exam session", .. }));

    let wrong_session = exam_session(&db, other.id).await;
    let err = FinalExamService::register(&db, campus.student.id, record.id, wrong_session.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}
