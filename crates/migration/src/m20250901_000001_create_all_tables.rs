use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create departments table
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Departments::Name).string().not_null())
                    .col(
                        ColumnDef::new(Departments::CrossCutting)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Departments::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Departments::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create careers table
        manager
            .create_table(
                Table::create()
                    .table(Careers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Careers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Careers::DepartmentId).uuid().not_null())
                    .col(ColumnDef::new(Careers::Name).string().not_null())
                    .col(ColumnDef::new(Careers::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Careers::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-careers-department_id")
                            .from(Careers::Table, Careers::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create students table
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Students::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Students::CareerId).uuid().not_null())
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(
                        ColumnDef::new(Students::FileNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-students-career_id")
                            .from(Students::Table, Students::CareerId)
                            .to(Careers::Table, Careers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::DepartmentId).uuid().not_null())
                    .col(ColumnDef::new(Courses::Code).string().not_null().unique_key())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-department_id")
                            .from(Courses::Table, Courses::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create career_courses junction table (study plans)
        manager
            .create_table(
                Table::create()
                    .table(CareerCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CareerCourses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CareerCourses::CareerId).uuid().not_null())
                    .col(ColumnDef::new(CareerCourses::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(CareerCourses::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-career_courses-career_id")
                            .from(CareerCourses::Table, CareerCourses::CareerId)
                            .to(Careers::Table, Careers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-career_courses-course_id")
                            .from(CareerCourses::Table, CareerCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sections table
        manager
            .create_table(
                Table::create()
                    .table(Sections::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sections::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Sections::CourseId).uuid().not_null())
                    .col(ColumnDef::new(Sections::Code).string().not_null())
                    .col(ColumnDef::new(Sections::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Sections::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections-course_id")
                            .from(Sections::Table, Sections::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create instructors table
        manager
            .create_table(
                Table::create()
                    .table(Instructors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Instructors::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Instructors::Name).string().not_null())
                    .col(ColumnDef::new(Instructors::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Instructors::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create course_chairs junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(CourseChairs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseChairs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseChairs::CourseId).uuid().not_null())
                    .col(ColumnDef::new(CourseChairs::InstructorId).uuid().not_null())
                    .col(ColumnDef::new(CourseChairs::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_chairs-course_id")
                            .from(CourseChairs::Table, CourseChairs::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_chairs-instructor_id")
                            .from(CourseChairs::Table, CourseChairs::InstructorId)
                            .to(Instructors::Table, Instructors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create prerequisites table (flat edges of the prerequisite graph)
        manager
            .create_table(
                Table::create()
                    .table(Prerequisites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Prerequisites::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Prerequisites::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(Prerequisites::RequiredCourseId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Prerequisites::Kind)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Prerequisites::Position).integer().not_null())
                    .col(
                        ColumnDef::new(Prerequisites::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-prerequisites-course_id")
                            .from(Prerequisites::Table, Prerequisites::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-prerequisites-required_course_id")
                            .from(Prerequisites::Table, Prerequisites::RequiredCourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create enrollments table
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Enrollments::StudentId).uuid().not_null())
                    .col(ColumnDef::new(Enrollments::CourseId).uuid().not_null())
                    .col(ColumnDef::new(Enrollments::SectionId).uuid())
                    .col(ColumnDef::new(Enrollments::Status).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Enrollments::Absences)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Enrollments::FinalGrade).small_integer())
                    .col(ColumnDef::new(Enrollments::EnrolledAt).date_time().not_null())
                    .col(ColumnDef::new(Enrollments::CompletedAt).date_time())
                    .col(ColumnDef::new(Enrollments::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-enrollments-student_id")
                            .from(Enrollments::Table, Enrollments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-enrollments-course_id")
                            .from(Enrollments::Table, Enrollments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-enrollments-section_id")
                            .from(Enrollments::Table, Enrollments::SectionId)
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create schedule_blocks table
        manager
            .create_table(
                Table::create()
                    .table(ScheduleBlocks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScheduleBlocks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ScheduleBlocks::CourseId).uuid().not_null())
                    .col(ColumnDef::new(ScheduleBlocks::SectionId).uuid())
                    .col(ColumnDef::new(ScheduleBlocks::InstructorId).uuid())
                    .col(ColumnDef::new(ScheduleBlocks::Day).string_len(16).not_null())
                    .col(ColumnDef::new(ScheduleBlocks::TimeBegin).time().not_null())
                    .col(ColumnDef::new(ScheduleBlocks::TimeEnd).time().not_null())
                    .col(ColumnDef::new(ScheduleBlocks::Room).string().not_null())
                    .col(
                        ColumnDef::new(ScheduleBlocks::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScheduleBlocks::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-schedule_blocks-course_id")
                            .from(ScheduleBlocks::Table, ScheduleBlocks::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-schedule_blocks-section_id")
                            .from(ScheduleBlocks::Table, ScheduleBlocks::SectionId)
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-schedule_blocks-instructor_id")
                            .from(ScheduleBlocks::Table, ScheduleBlocks::InstructorId)
                            .to(Instructors::Table, Instructors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create exam_sessions table
        manager
            .create_table(
                Table::create()
                    .table(ExamSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExamSessions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ExamSessions::CourseId).uuid().not_null())
                    .col(ColumnDef::new(ExamSessions::Date).date().not_null())
                    .col(ColumnDef::new(ExamSessions::Location).string().not_null())
                    .col(ColumnDef::new(ExamSessions::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(ExamSessions::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-exam_sessions-course_id")
                            .from(ExamSessions::Table, ExamSessions::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create exam_registrations table
        manager
            .create_table(
                Table::create()
                    .table(ExamRegistrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExamRegistrations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExamRegistrations::EnrollmentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExamRegistrations::ExamSessionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExamRegistrations::Status)
                            .string_len(16)
                            .not_null()
                            .default("registered"),
                    )
                    .col(ColumnDef::new(ExamRegistrations::Grade).small_integer())
                    .col(
                        ColumnDef::new(ExamRegistrations::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExamRegistrations::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-exam_registrations-enrollment_id")
                            .from(ExamRegistrations::Table, ExamRegistrations::EnrollmentId)
                            .to(Enrollments::Table, Enrollments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-exam_registrations-exam_session_id")
                            .from(ExamRegistrations::Table, ExamRegistrations::ExamSessionId)
                            .to(ExamSessions::Table, ExamSessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(ExamRegistrations::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ExamSessions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ScheduleBlocks::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Prerequisites::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseChairs::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Instructors::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Sections::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CareerCourses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Careers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Departments {
    Table,
    Id,
    Name,
    CrossCutting,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Careers {
    Table,
    Id,
    DepartmentId,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Students {
    Table,
    Id,
    CareerId,
    Name,
    FileNumber,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    DepartmentId,
    Code,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum CareerCourses {
    Table,
    Id,
    CareerId,
    CourseId,
    CreatedAt,
}

#[derive(Iden)]
enum Sections {
    Table,
    Id,
    CourseId,
    Code,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Instructors {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum CourseChairs {
    Table,
    Id,
    CourseId,
    InstructorId,
    CreatedAt,
}

#[derive(Iden)]
enum Prerequisites {
    Table,
    Id,
    CourseId,
    RequiredCourseId,
    Kind,
    Position,
    CreatedAt,
}

#[derive(Iden)]
enum Enrollments {
    Table,
    Id,
    StudentId,
    CourseId,
    SectionId,
    Status,
    Absences,
    FinalGrade,
    EnrolledAt,
    CompletedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum ScheduleBlocks {
    Table,
    Id,
    CourseId,
    SectionId,
    InstructorId,
    Day,
    TimeBegin,
    TimeEnd,
    Room,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum ExamSessions {
    Table,
    Id,
    CourseId,
    Date,
    Location,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum ExamRegistrations {
    Table,
    Id,
    EnrollmentId,
    ExamSessionId,
    Status,
    Grade,
    CreatedAt,
    UpdatedAt,
}
