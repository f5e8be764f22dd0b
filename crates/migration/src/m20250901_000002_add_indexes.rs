use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One edge per (course, required course, kind)
        manager
            .create_index(
                Index::create()
                    .name("idx_prerequisites_unique_edge")
                    .table(Prerequisites::Table)
                    .col(Prerequisites::CourseId)
                    .col(Prerequisites::RequiredCourseId)
                    .col(Prerequisites::Kind)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // One registration per (enrollment, exam session)
        manager
            .create_index(
                Index::create()
                    .name("idx_exam_registrations_unique_session")
                    .table(ExamRegistrations::Table)
                    .col(ExamRegistrations::EnrollmentId)
                    .col(ExamRegistrations::ExamSessionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_career_courses_unique_course")
                    .table(CareerCourses::Table)
                    .col(CareerCourses::CareerId)
                    .col(CareerCourses::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_chairs_unique_instructor")
                    .table(CourseChairs::Table)
                    .col(CourseChairs::CourseId)
                    .col(CourseChairs::InstructorId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Enrollment history lookups by student and course
        manager
            .create_index(
                Index::create()
                    .name("idx_enrollments_student_course")
                    .table(Enrollments::Table)
                    .col(Enrollments::StudentId)
                    .col(Enrollments::CourseId)
                    .to_owned(),
            )
            .await?;

        // Overlap checks filter by scope and day
        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_blocks_course_day")
                    .table(ScheduleBlocks::Table)
                    .col(ScheduleBlocks::CourseId)
                    .col(ScheduleBlocks::Day)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_blocks_section_day")
                    .table(ScheduleBlocks::Table)
                    .col(ScheduleBlocks::SectionId)
                    .col(ScheduleBlocks::Day)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_prerequisites_unique_edge")
                    .table(Prerequisites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_exam_registrations_unique_session")
                    .table(ExamRegistrations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_career_courses_unique_course")
                    .table(CareerCourses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_chairs_unique_instructor")
                    .table(CourseChairs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_enrollments_student_course")
                    .table(Enrollments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_schedule_blocks_course_day")
                    .table(ScheduleBlocks::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_schedule_blocks_section_day")
                    .table(ScheduleBlocks::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Prerequisites {
    Table,
    CourseId,
    RequiredCourseId,
    Kind,
}

#[derive(Iden)]
enum ExamRegistrations {
    Table,
    EnrollmentId,
    ExamSessionId,
}

#[derive(Iden)]
enum CareerCourses {
    Table,
    CareerId,
    CourseId,
}

#[derive(Iden)]
enum CourseChairs {
    Table,
    CourseId,
    InstructorId,
}

#[derive(Iden)]
enum Enrollments {
    Table,
    StudentId,
    CourseId,
}

#[derive(Iden)]
enum ScheduleBlocks {
    Table,
    CourseId,
    SectionId,
    Day,
}
