mod common;

use common::{Campus, enrollment, setup};
use database::{
    ServiceError,
    services::{eligibility::EligibilityService, prerequisite::PrerequisiteService},
};
use models::{
    requisite::PrerequisiteKind::{Cursada, Final},
    status::EnrollmentStatus,
};
use uuid::Uuid;

#[tokio::test]
async fn test_course_without_prerequisites_is_satisfied() {
    let db = setup().await;
    let campus = Campus::new(&db).await;
    let course = campus.course(&db, "SI-101", "Algorithms").await;

    for kind in [Cursada, Final] {
        let result = EligibilityService::evaluate(&db, campus.student.id, course.id, kind)
            .await
            .unwrap();
        assert!(result.satisfied);
        assert!(result.missing.is_empty());
    }
}

#[tokio::test]
async fn test_cursada_accepts_completed_or_approved() {
    let db = setup().await;
    let campus = Campus::new(&db).await;
    let target = campus.course(&db, "SI-301", "Operating Systems").await;
    let completed = campus.course(&db, "SI-201", "Computer Architecture").await;
    let approved = campus.course(&db, "SI-101", "Algorithms").await;

    PrerequisiteService::add_edge(&db, target.id, completed.id, Cursada)
        .await
        .unwrap();
    PrerequisiteService::add_edge(&db, target.id, approved.id, Cursada)
        .await
        .unwrap();

    let student = campus.student.id;
    enrollment(&db, student, completed.id, EnrollmentStatus::Completed).await;
    enrollment(&db, student, approved.id, EnrollmentStatus::Approved).await;

    let result = EligibilityService::evaluate(&db, student, target.id, Cursada)
        .await
        .unwrap();
    assert!(result.satisfied);

    // A completed cursada is not enough for a final prerequisite
    PrerequisiteService::add_edge(&db, target.id, completed.id, Final)
        .await
        .unwrap();
    let result = EligibilityService::evaluate(&db, student, target.id, Final)
        .await
        .unwrap();
    assert!(!result.satisfied);
    assert_eq!(result.missing_names(), "Computer Architecture");
}

#[tokio::test]
async fn test_missing_courses_follow_edge_order() {
    let db = setup().await;
    let campus = Campus::new(&db).await;
    let target = campus.course(&db, "SI-401", "Distributed Systems").await;
    let first = campus.course(&db, "SI-301", "Operating Systems").await;
    let second = campus.course(&db, "SI-302", "Networks").await;
    let third = campus.course(&db, "SI-201", "Databases").await;

    for required in [&first, &second, &third] {
        PrerequisiteService::add_edge(&db, target.id, required.id, Final)
            .await
            .unwrap();
    }

    let student = campus.student.id;
    for required in [&first, &second, &third] {
        enrollment(&db, student, required.id, EnrollmentStatus::Approved).await;
    }
    let result = EligibilityService::evaluate(&db, student, target.id, Final)
        .await
        .unwrap();
    assert!(result.satisfied);

    // Enrolled and free records do not count
    let other = common::student(&db, campus.career.id, "10002").await;
    enrollment(&db, other.id, second.id, EnrollmentStatus::Approved).await;
    enrollment(&db, other.id, first.id, EnrollmentStatus::Free).await;
    enrollment(&db, other.id, third.id, EnrollmentStatus::Enrolled).await;

    let result = EligibilityService::evaluate(&db, other.id, target.id, Final)
        .await
        .unwrap();
    assert!(!result.satisfied);
    assert_eq!(result.missing_names(), "Operating Systems, Databases");
}

#[tokio::test]
async fn test_evaluation_is_repeatable() {
    let db = setup().await;
    let campus = Campus::new(&db).await;
    let target = campus.course(&db, "SI-301", "Operating Systems").await;
    let required = campus.course(&db, "SI-101", "Algorithms").await;
    PrerequisiteService::add_edge(&db, target.id, required.id, Cursada)
        .await
        .unwrap();

    let first = EligibilityService::evaluate(&db, campus.student.id, target.id, Cursada)
        .await
        .unwrap();
    let second = EligibilityService::evaluate(&db, campus.student.id, target.id, Cursada)
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_only_direct_prerequisites_are_checked() {
    let db = setup().await;
    let campus = Campus::new(&db).await;
    let a = campus.course(&db, "SI-101", "Algorithms").await;
    let b = campus.course(&db, "SI-201", "Data Structures").await;
    let c = campus.course(&db, "SI-301", "Compilers").await;

    // c -> b -> a, the student only holds b
    PrerequisiteService::add_edge(&db, c.id, b.id, Cursada)
        .await
        .unwrap();
    PrerequisiteService::add_edge(&db, b.id, a.id, Cursada)
        .await
        .unwrap();
    enrollment(&db, campus.student.id, b.id, EnrollmentStatus::Completed).await;

    let result = EligibilityService::evaluate(&db, campus.student.id, c.id, Cursada)
        .await
        .unwrap();
    assert!(result.satisfied);
}

#[tokio::test]
async fn test_evaluate_eligibility_resolves_ids() {
    let db = setup().await;
    let campus = Campus::new(&db).await;
    let course = campus.course(&db, "SI-101", "Algorithms").await;

    let err = EligibilityService::evaluate_eligibility(&db, Uuid::new_v4(), course.id, Cursada)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "student", .. }));

    let err =
        EligibilityService::evaluate_eligibility(&db, campus.student.id, Uuid::new_v4(), Cursada)
            .await
            .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "course", .. }));
}
