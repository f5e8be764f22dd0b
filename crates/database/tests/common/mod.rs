#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime, Utc};
use database::entities::{
    career_courses, careers, course_chairs, courses, departments, enrollments, exam_sessions,
    instructors, sections, students,
};
use migration::{Migrator, MigratorTrait};
use models::status::EnrollmentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database, DatabaseConnection,
};
use uuid::Uuid;

/// A fresh in-memory database with the full schema applied
pub async fn setup() -> DatabaseConnection {
    // A single connection keeps every query on the same in-memory database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub fn time(hhmm: &str) -> NaiveTime {
    NaiveTime::parse_from_str(hhmm, "%H:%M").unwrap()
}

/// A department with one career, a student in it and helpers to build the
/// rest of the catalog around them
pub struct Campus {
    pub department: departments::Model,
    pub career: careers::Model,
    pub student: students::Model,
}

impl Campus {
    pub async fn new(db: &DatabaseConnection) -> Self {
        let department = department(db, "Systems Engineering", false).await;
        let career = career(db, department.id, "Information Systems").await;
        let student = student(db, career.id, "10001").await;

        Self {
            department,
            career,
            student,
        }
    }

    /// A course of the department that is part of the career's study plan
    pub async fn course(&self, db: &DatabaseConnection, code: &str, name: &str) -> courses::Model {
        let course = course(db, self.department.id, code, name).await;
        add_to_plan(db, self.career.id, course.id).await;
        course
    }
}

pub async fn department(
    db: &DatabaseConnection,
    name: &str,
    cross_cutting: bool,
) -> departments::Model {
    let now = Utc::now().naive_utc();
    departments::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        cross_cutting: Set(cross_cutting),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn career(db: &DatabaseConnection, department_id: Uuid, name: &str) -> careers::Model {
    let now = Utc::now().naive_utc();
    careers::ActiveModel {
        id: Set(Uuid::new_v4()),
        department_id: Set(department_id),
        name: Set(name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn student(db: &DatabaseConnection, career_id: Uuid, file_number: &str) -> students::Model {
    let now = Utc::now().naive_utc();
    students::ActiveModel {
        id: Set(Uuid::new_v4()),
        career_id: Set(career_id),
        name: Set(format!("Student {file_number}")),
        file_number: Set(file_number.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn course(
    db: &DatabaseConnection,
    department_id: Uuid,
    code: &str,
    name: &str,
) -> courses::Model {
    let now = Utc::now().naive_utc();
    courses::ActiveModel {
        id: Set(Uuid::new_v4()),
        department_id: Set(department_id),
        code: Set(code.to_string()),
        name: Set(name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn add_to_plan(db: &DatabaseConnection, career_id: Uuid, course_id: Uuid) {
    career_courses::ActiveModel {
        id: Set(Uuid::new_v4()),
        career_id: Set(career_id),
        course_id: Set(course_id),
        created_at: Set(Utc::now().naive_utc()),
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn section(db: &DatabaseConnection, course_id: Uuid, code: &str) -> sections::Model {
    let now = Utc::now().naive_utc();
    sections::ActiveModel {
        id: Set(Uuid::new_v4()),
        course_id: Set(course_id),
        code: Set(code.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn instructor(db: &DatabaseConnection, name: &str) -> instructors::Model {
    let now = Utc::now().naive_utc();
    instructors::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn make_chair(db: &DatabaseConnection, course_id: Uuid, instructor_id: Uuid) {
    course_chairs::ActiveModel {
        id: Set(Uuid::new_v4()),
        course_id: Set(course_id),
        instructor_id: Set(instructor_id),
        created_at: Set(Utc::now().naive_utc()),
    }
    .insert(db)
    .await
    .unwrap();
}

/// Inserts an enrollment record directly, bypassing the workflow's checks
pub async fn enrollment(
    db: &DatabaseConnection,
    student_id: Uuid,
    course_id: Uuid,
    status: EnrollmentStatus,
) -> enrollments::Model {
    let now = Utc::now().naive_utc();
    enrollments::ActiveModel {
        id: Set(Uuid::new_v4()),
        student_id: Set(student_id),
        course_id: Set(course_id),
        section_id: Set(None),
        status: Set(status),
        absences: Set(0),
        final_grade: Set(None),
        enrolled_at: Set(now),
        completed_at: Set((status != EnrollmentStatus::Enrolled).then_some(now)),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn exam_session(db: &DatabaseConnection, course_id: Uuid) -> exam_sessions::Model {
    let now = Utc::now().naive_utc();
    exam_sessions::ActiveModel {
        id: Set(Uuid::new_v4()),
        course_id: Set(course_id),
        date: Set(NaiveDate::from_ymd_opt(2025, 12, 15).unwrap()),
        location: Set("Aula Magna".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .unwrap()
}
