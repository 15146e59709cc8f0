// Absence records.
//
// - AbsenceCandidate: raw, untrusted input as it arrives from a form or an import row.
// - NormalizedAbsence: a candidate that passed validation and is ready for storage.
// - Absence: a stored record with its identifier.

use crate::shared::core::primitives::{AbsenceId, PersonnelNumber, ScheduleEntryId, hh_mm};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceCandidate {
    pub personnel_number: PersonnelNumber,
    pub date: String,
    pub full_day: bool,
    pub reason: String,
    #[serde(default)]
    pub manual_start: Option<String>,
    #[serde(default)]
    pub manual_end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedAbsence {
    pub personnel_number: PersonnelNumber,
    pub date: NaiveDate,
    pub full_day: bool,
    #[serde(with = "hh_mm")]
    pub start: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end: NaiveTime,
    pub reason: String,
    /// Set only when start and end were copied from the schedule (full day).
    pub schedule_entry_id: Option<ScheduleEntryId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Absence {
    pub id: AbsenceId,
    pub personnel_number: PersonnelNumber,
    pub date: NaiveDate,
    pub full_day: bool,
    #[serde(with = "hh_mm")]
    pub start: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end: NaiveTime,
    pub reason: String,
    pub schedule_entry_id: Option<ScheduleEntryId>,
}

impl Absence {
    pub fn from_normalized(id: AbsenceId, absence: NormalizedAbsence) -> Self {
        Self {
            id,
            personnel_number: absence.personnel_number,
            date: absence.date,
            full_day: absence.full_day,
            start: absence.start,
            end: absence.end,
            reason: absence.reason,
            schedule_entry_id: absence.schedule_entry_id,
        }
    }

    pub fn is_same_slot(&self, personnel_number: &str, date: NaiveDate) -> bool {
        self.personnel_number == personnel_number && self.date == date
    }
}
