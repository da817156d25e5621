//! HTTP handlers for the school collections and enrollment.

pub mod classes;
pub mod enroll;
pub mod schedules;
pub mod students;
pub mod teachers;
