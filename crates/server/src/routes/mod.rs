pub mod auth;
pub mod eligibility;
pub mod enrollment;
pub mod exam;
pub mod grading;
pub mod health;
pub mod prerequisite;
pub mod root;
pub mod schedule;
