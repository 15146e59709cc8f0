// Lifecycle journal entries.
//
// Entries are append-only. Each one carries the department and position the
// employee ended up with, so the journal alone reconstructs placement history.

use crate::shared::core::primitives::{DepartmentId, JournalEntryId, PersonnelNumber, PositionId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEventType {
    Hire,
    Dismissal,
    Transfer,
    Suspension,
    Reinstatement,
}

impl LifecycleEventType {
    pub fn requires_reason(&self) -> bool {
        matches!(self, LifecycleEventType::Dismissal)
    }
}

impl fmt::Display for LifecycleEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleEventType::Hire => "hire",
            LifecycleEventType::Dismissal => "dismissal",
            LifecycleEventType::Transfer => "transfer",
            LifecycleEventType::Suspension => "suspension",
            LifecycleEventType::Reinstatement => "reinstatement",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleJournalEntry {
    pub id: JournalEntryId,
    pub personnel_number: PersonnelNumber,
    pub event_type: LifecycleEventType,
    pub event_date: NaiveDate,
    pub department_id: DepartmentId,
    pub position_id: PositionId,
    pub reason: Option<String>,
    pub recorded_at: DateTime<Utc>,
}
