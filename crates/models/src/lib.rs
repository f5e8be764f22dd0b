//! Store-independent values shared by the enrollment rules engine and its
//! HTTP surface.

pub mod days;
pub mod grade;
pub mod requisite;
pub mod status;
pub mod time_range;

#[cfg(feature = "database")]
mod db;
