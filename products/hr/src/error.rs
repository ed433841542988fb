use thiserror::Error;

pub type HrResult<T> = Result<T, HrError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HrError {
    #[error("employee already has id {current}, refusing {attempted}")]
    IdAlreadyAssigned { current: i32, attempted: i32 },
    #[error("required field `{0}` is blank")]
    BlankField(&'static str),
    #[error("employee has no department")]
    UnassignedDepartment,
}
