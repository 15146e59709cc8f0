use crate::modules::personnel::core::employee::Employee;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HireEmployee {
    pub employee: Employee,
    /// Defaults to today.
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub reason: Option<String>,
}
