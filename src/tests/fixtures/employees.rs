// Employee fixtures.
// The default employee is read from ./src/tests/fixtures/json/employee.json.

use crate::modules::personnel::core::employee::{Employee, EmploymentState};
use crate::modules::personnel::core::event::{LifecycleEventType, LifecycleJournalEntry};
use crate::shared::core::primitives::new_id;
use crate::tests::fixtures::schedules::monday;
use chrono::{TimeZone, Utc};
use std::fs;

pub struct EmployeeBuilder {
    inner: Employee,
}

impl Default for EmployeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EmployeeBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/employee.json").unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn personnel_number(mut self, v: impl Into<String>) -> Self {
        self.inner.personnel_number = v.into();
        self
    }

    pub fn middle_name(mut self, v: Option<&str>) -> Self {
        self.inner.middle_name = v.map(String::from);
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.inner.last_name = v.into();
        self
    }

    pub fn position_id(mut self, v: impl Into<String>) -> Self {
        self.inner.position_id = v.into();
        self
    }

    pub fn department_id(mut self, v: impl Into<String>) -> Self {
        self.inner.department_id = v.into();
        self
    }

    pub fn state(mut self, v: EmploymentState) -> Self {
        self.inner.state = v;
        self
    }

    pub fn build(self) -> Employee {
        self.inner
    }
}

pub fn journal_entry(employee: &Employee, event_type: LifecycleEventType) -> LifecycleJournalEntry {
    LifecycleJournalEntry {
        id: new_id(),
        personnel_number: employee.personnel_number.clone(),
        event_type,
        event_date: monday(),
        department_id: employee.department_id.clone(),
        position_id: employee.position_id.clone(),
        reason: None,
        recorded_at: Utc.with_ymd_and_hms(2024, 3, 4, 8, 0, 0).unwrap(),
    }
}

#[cfg(test)]
mod employee_builder_tests {
    use super::*;
    use crate::modules::personnel::core::employee::Gender;
    use chrono::NaiveDate;
    use rstest::rstest;

    #[rstest]
    fn default_parses_the_json_fixture() {
        let employee = EmployeeBuilder::default().build();
        assert_eq!(employee.personnel_number, "E-1001");
        assert_eq!(employee.first_name, "Ada");
        assert_eq!(employee.middle_name, None);
        assert_eq!(employee.birth_date, NaiveDate::from_ymd_opt(1990, 12, 10).unwrap());
        assert_eq!(employee.gender, Gender::Female);
        assert_eq!(employee.position_id, "P-DEV");
        assert_eq!(employee.department_id, "D-ENG");
        assert_eq!(employee.state, EmploymentState::Active);
    }

    #[rstest]
    fn setters_override_the_placement() {
        let employee = EmployeeBuilder::new()
            .personnel_number("E-2002")
            .position_id("P-OPS")
            .department_id("D-OPS")
            .state(EmploymentState::Unavailable)
            .build();
        assert_eq!(employee.personnel_number, "E-2002");
        assert_eq!(employee.position_id, "P-OPS");
        assert_eq!(employee.department_id, "D-OPS");
        assert_eq!(employee.state, EmploymentState::Unavailable);
    }
}
