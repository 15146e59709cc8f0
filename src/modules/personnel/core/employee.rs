use crate::shared::core::primitives::{DepartmentId, PersonnelNumber, PositionId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentState {
    Active,
    Dismissed,
    /// Temporarily unavailable, e.g. suspended or on long leave.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
    Unspecified,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub personnel_number: PersonnelNumber,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub position_id: PositionId,
    pub department_id: DepartmentId,
    pub state: EmploymentState,
}

/// The part of an employee record lifecycle transitions are derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub state: EmploymentState,
    pub department_id: DepartmentId,
    pub position_id: PositionId,
}

impl Employee {
    pub fn placement(&self) -> Placement {
        Placement {
            state: self.state,
            department_id: self.department_id.clone(),
            position_id: self.position_id.clone(),
        }
    }

    pub fn full_name(&self) -> String {
        match self.middle_name.as_deref().map(str::trim) {
            Some(middle) if !middle.is_empty() => {
                format!("{} {} {}", self.first_name, middle, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}
