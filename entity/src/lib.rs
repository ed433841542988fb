//! Row definitions shared by the storage boundary and the HR slice.

pub mod employee;

pub use employee::{Department, EmployeeStatus, UnknownVariant};
