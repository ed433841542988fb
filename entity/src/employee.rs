use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of the `EMPLOYEE` table. Column names keep the spaced,
/// capitalised form the table was originally created with.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "EMPLOYEE")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ID")]
    pub id: i32,
    #[sea_orm(column_name = "First name")]
    pub first_name: String,
    #[sea_orm(column_name = "Last name")]
    pub last_name: String,
    #[sea_orm(column_name = "Email")]
    pub email: String,
    #[sea_orm(column_name = "Department")]
    pub department: Department,
    #[sea_orm(column_name = "Date of birth")]
    pub date_of_birth: Date,
    #[sea_orm(column_name = "Date of employment")]
    pub date_of_employment: Date,
    #[sea_orm(column_name = "Salary")]
    pub salary: i32,
    #[sea_orm(column_name = "Status")]
    pub status: EmployeeStatus,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Stored by name, never by ordinal.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Hash,
    Eq,
    PartialEq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Department {
    #[sea_orm(string_value = "ENGINEERING")]
    Engineering,
    #[sea_orm(string_value = "FINANCE")]
    Finance,
    #[sea_orm(string_value = "HUMAN_RESOURCES")]
    HumanResources,
    #[sea_orm(string_value = "MARKETING")]
    Marketing,
    #[sea_orm(string_value = "OPERATIONS")]
    Operations,
    #[sea_orm(string_value = "SALES")]
    Sales,
    #[sea_orm(string_value = "SUPPORT")]
    Support,
    /// Placeholder held by a builder that was never given a department.
    #[default]
    #[sea_orm(string_value = "UNASSIGNED")]
    Unassigned,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "ENGINEERING",
            Department::Finance => "FINANCE",
            Department::HumanResources => "HUMAN_RESOURCES",
            Department::Marketing => "MARKETING",
            Department::Operations => "OPERATIONS",
            Department::Sales => "SALES",
            Department::Support => "SUPPORT",
            Department::Unassigned => "UNASSIGNED",
        }
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Hash,
    Eq,
    PartialEq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    #[default]
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "INACTIVE")]
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "ACTIVE",
            EmployeeStatus::Inactive => "INACTIVE",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Department {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_value(&s.to_owned()).map_err(|_| UnknownVariant {
            kind: "department",
            value: s.to_owned(),
        })
    }
}

impl FromStr for EmployeeStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_value(&s.to_owned()).map_err(|_| UnknownVariant {
            kind: "employee status",
            value: s.to_owned(),
        })
    }
}
