//! Domain records for the employee directory.

pub mod employee;
pub mod role;

pub use employee::{Employee, EmployeeId, NewEmployee};
pub use role::Role;
