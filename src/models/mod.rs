//! Core data models for the employee directory.

mod employee;
mod mode;

pub use employee::{Employee, EmployeeFields, EmployeeId, Field};
pub use mode::UiMode;
