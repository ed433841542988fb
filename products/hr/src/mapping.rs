use entity::Department;
use entity::employee;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use crate::employee::Employee;
use crate::error::{HrError, HrResult};

impl From<employee::Model> for Employee {
    fn from(model: employee::Model) -> Self {
        Self {
            id: Some(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            department: model.department,
            date_of_birth: model.date_of_birth,
            date_of_employment: model.date_of_employment,
            salary: model.salary,
            status: model.status,
        }
    }
}

impl Employee {
    /// Convert into a row ready for insert (no id) or update (id kept as
    /// the key). This is where the NOT NULL intent of the text columns and
    /// the department is enforced.
    pub fn to_active_model(&self) -> HrResult<employee::ActiveModel> {
        for (field, value) in [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
        ] {
            if value.trim().is_empty() {
                return Err(HrError::BlankField(field));
            }
        }
        if self.department == Department::Unassigned {
            return Err(HrError::UnassignedDepartment);
        }

        Ok(employee::ActiveModel {
            id: match self.id {
                Some(id) => Unchanged(id),
                None => NotSet,
            },
            first_name: Set(self.first_name.clone()),
            last_name: Set(self.last_name.clone()),
            email: Set(self.email.clone()),
            department: Set(self.department),
            date_of_birth: Set(self.date_of_birth),
            date_of_employment: Set(self.date_of_employment),
            salary: Set(self.salary),
            status: Set(self.status),
        })
    }
}
