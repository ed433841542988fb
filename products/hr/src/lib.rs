//! HR vertical slice: the employee record and its mapping onto the
//! `EMPLOYEE` row.

mod employee;
mod error;
mod mapping;

pub use employee::{Employee, EmployeeBuilder};
pub use entity::{Department, EmployeeStatus, UnknownVariant};
pub use error::{HrError, HrResult};
