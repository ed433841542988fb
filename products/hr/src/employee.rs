use std::fmt;

use chrono::NaiveDate;
use entity::{Department, EmployeeStatus};
use serde::{Deserialize, Serialize};

use crate::error::{HrError, HrResult};

/// An employee record.
///
/// Built through [`EmployeeBuilder`]; the id stays `None` until the storage
/// layer assigns one. Equality and hashing cover every field, id and status
/// included. An `id` in incoming JSON is ignored; only storage assigns one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    #[serde(skip_deserializing)]
    pub(crate) id: Option<i32>,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: String,
    pub(crate) department: Department,
    pub(crate) date_of_birth: NaiveDate,
    pub(crate) date_of_employment: NaiveDate,
    pub(crate) salary: i32,
    #[serde(default)]
    pub(crate) status: EmployeeStatus,
}

impl Employee {
    pub fn builder() -> EmployeeBuilder {
        EmployeeBuilder::default()
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn department(&self) -> Department {
        self.department
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn date_of_employment(&self) -> NaiveDate {
        self.date_of_employment
    }

    pub fn salary(&self) -> i32 {
        self.salary
    }

    pub fn status(&self) -> EmployeeStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    pub fn is_inactive(&self) -> bool {
        self.status == EmployeeStatus::Inactive
    }

    pub fn enable(&mut self) {
        tracing::debug!(id = ?self.id, from = self.status.as_str(), "enable employee");
        self.status = EmployeeStatus::Active;
    }

    pub fn disable(&mut self) {
        tracing::debug!(id = ?self.id, from = self.status.as_str(), "disable employee");
        self.status = EmployeeStatus::Inactive;
    }

    /// Record the id handed out by storage. Re-assigning the same id is a
    /// no-op; a different id is rejected and leaves the record untouched.
    pub fn assign_id(&mut self, id: i32) -> HrResult<()> {
        match self.id {
            Some(current) if current != id => Err(HrError::IdAlreadyAssigned {
                current,
                attempted: id,
            }),
            Some(_) => Ok(()),
            None => {
                tracing::debug!(id, "employee id assigned");
                self.id = Some(id);
                Ok(())
            }
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} <{}> (", self.first_name, self.last_name, self.email)?;
        match self.id {
            Some(id) => write!(f, "id {id}")?,
            None => f.write_str("unsaved")?,
        }
        write!(
            f,
            ", {}, {}, born {}, employed {}, salary {})",
            self.department.as_str(),
            self.status.as_str(),
            self.date_of_birth,
            self.date_of_employment,
            self.salary,
        )
    }
}

/// Accumulates fields for an [`Employee`]. Nothing is validated here; unset
/// fields fall back to empty text, zero, `NaiveDate::default()` and
/// [`Department::Unassigned`].
#[derive(Clone, Debug, Default)]
pub struct EmployeeBuilder {
    first_name: String,
    last_name: String,
    email: String,
    department: Department,
    date_of_birth: NaiveDate,
    date_of_employment: NaiveDate,
    salary: i32,
}

impl EmployeeBuilder {
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn department(mut self, department: Department) -> Self {
        self.department = department;
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = date_of_birth;
        self
    }

    pub fn date_of_employment(mut self, date_of_employment: NaiveDate) -> Self {
        self.date_of_employment = date_of_employment;
        self
    }

    pub fn salary(mut self, salary: i32) -> Self {
        self.salary = salary;
        self
    }

    pub fn build(self) -> Employee {
        Employee {
            id: None,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            department: self.department,
            date_of_birth: self.date_of_birth,
            date_of_employment: self.date_of_employment,
            salary: self.salary,
            status: EmployeeStatus::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ada() -> Employee {
        Employee::builder()
            .first_name("Ada")
            .last_name("Lovelace")
            .email("ada@x.com")
            .department(Department::Engineering)
            .date_of_birth(date(1815, 12, 10))
            .date_of_employment(date(2020, 1, 1))
            .salary(90_000)
            .build()
    }

    fn hash_of(employee: &Employee) -> u64 {
        let mut hasher = DefaultHasher::new();
        employee.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn build_copies_every_field() {
        let employee = ada();
        assert_eq!(employee.id(), None);
        assert_eq!(employee.first_name(), "Ada");
        assert_eq!(employee.last_name(), "Lovelace");
        assert_eq!(employee.email(), "ada@x.com");
        assert_eq!(employee.department(), Department::Engineering);
        assert_eq!(employee.date_of_birth(), date(1815, 12, 10));
        assert_eq!(employee.date_of_employment(), date(2020, 1, 1));
        assert_eq!(employee.salary(), 90_000);
        assert_eq!(employee.status(), EmployeeStatus::Active);
        assert!(employee.is_active());
        assert!(!employee.is_inactive());
    }

    #[test]
    fn last_write_wins() {
        let employee = Employee::builder()
            .salary(1)
            .department(Department::Sales)
            .first_name("Charles")
            .first_name("Ada")
            .department(Department::Finance)
            .salary(2)
            .build();
        assert_eq!(employee.first_name(), "Ada");
        assert_eq!(employee.department(), Department::Finance);
        assert_eq!(employee.salary(), 2);
    }

    #[test]
    fn unset_fields_are_neutral() {
        let employee = Employee::builder().build();
        assert_eq!(employee.first_name(), "");
        assert_eq!(employee.email(), "");
        assert_eq!(employee.salary(), 0);
        assert_eq!(employee.department(), Department::Unassigned);
        assert_eq!(employee.date_of_birth(), NaiveDate::default());
        assert!(employee.is_active());
    }

    #[test]
    fn disable_then_enable() {
        let mut employee = ada();
        employee.disable();
        assert!(!employee.is_active());
        assert!(employee.is_inactive());
        employee.disable();
        assert!(employee.is_inactive());

        employee.enable();
        assert!(employee.is_active());
        employee.enable();
        assert!(employee.is_active());
        assert!(!employee.is_inactive());
    }

    #[test]
    fn equality_covers_all_fields() {
        let a = ada();
        let b = ada();
        let c = ada();
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);
        assert_eq!(hash_of(&a), hash_of(&b));

        let variants = [
            Employee { first_name: "Augusta".into(), ..ada() },
            Employee { last_name: "Byron".into(), ..ada() },
            Employee { email: "ada@y.com".into(), ..ada() },
            Employee { department: Department::Finance, ..ada() },
            Employee { date_of_birth: date(1815, 12, 11), ..ada() },
            Employee { date_of_employment: date(2021, 1, 1), ..ada() },
            Employee { salary: 90_001, ..ada() },
            Employee { status: EmployeeStatus::Inactive, ..ada() },
            Employee { id: Some(1), ..ada() },
        ];
        for other in &variants {
            assert_ne!(&a, other);
        }
    }

    #[test]
    fn status_round_trip_restores_equality() {
        let mut employee = ada();
        employee.disable();
        assert_ne!(employee, ada());
        employee.enable();
        assert_eq!(employee, ada());
        assert_eq!(hash_of(&employee), hash_of(&ada()));
    }

    #[test]
    fn id_is_assigned_once() {
        let mut employee = ada();
        employee.assign_id(7).unwrap();
        assert_eq!(employee.id(), Some(7));
        employee.assign_id(7).unwrap();

        let err = employee.assign_id(8).unwrap_err();
        assert_eq!(
            err,
            HrError::IdAlreadyAssigned {
                current: 7,
                attempted: 8
            }
        );
        assert_eq!(employee.id(), Some(7));
    }

    #[test]
    fn display_names_every_field() {
        let mut employee = ada();
        assert_eq!(
            employee.to_string(),
            "Ada Lovelace <ada@x.com> (unsaved, ENGINEERING, ACTIVE, born 1815-12-10, employed 2020-01-01, salary 90000)"
        );
        employee.assign_id(3).unwrap();
        employee.disable();
        assert_eq!(
            employee.to_string(),
            "Ada Lovelace <ada@x.com> (id 3, ENGINEERING, INACTIVE, born 1815-12-10, employed 2020-01-01, salary 90000)"
        );
    }
}
