pub mod career_courses;
pub mod careers;
pub mod course_chairs;
pub mod courses;
pub mod departments;
pub mod enrollments;
pub mod exam_registrations;
pub mod exam_sessions;
pub mod instructors;
pub mod prerequisites;
pub mod schedule_blocks;
pub mod sections;
pub mod students;
