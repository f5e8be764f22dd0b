pub mod eligibility;
pub mod enrollment;
pub mod final_exam;
pub mod grading;
pub mod prerequisite;
pub mod records;
pub mod schedule;
