pub mod enrollment;
pub mod exam;
pub mod prerequisite;
pub mod schedule;
