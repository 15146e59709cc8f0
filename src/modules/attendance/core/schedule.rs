// Work schedule model and the schedule resolver.
//
// Purpose
// - Describe the configured working window of a position for an ISO weekday.
// - Resolve the expected window for a position on a calendar date.
//
// Boundaries
// - Pure. The resolver reads a ScheduleLookup and never performs input or output.
// - Windows are same-day only. An end earlier than the start is refused when the
//   schedule table is built, see ScheduleTable.

use crate::shared::core::primitives::{PositionId, ScheduleEntryId, hh_mm};
use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: ScheduleEntryId,
    pub position_id: PositionId,
    /// ISO weekday, Monday = 1 through Sunday = 7.
    pub day_of_week: u8,
    #[serde(with = "hh_mm")]
    pub start: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end: NaiveTime,
}

impl ScheduleEntry {
    pub fn is_non_working(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkWindow {
    #[serde(with = "hh_mm")]
    pub start: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end: NaiveTime,
}

impl WorkWindow {
    /// `start <= from < to <= end`.
    pub fn contains(&self, from: NaiveTime, to: NaiveTime) -> bool {
        self.start <= from && from < to && to <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleResolution {
    Working {
        entry_id: ScheduleEntryId,
        window: WorkWindow,
    },
    NonWorking {
        entry_id: ScheduleEntryId,
    },
    /// No schedule configured for the position on that weekday.
    Unknown,
}

/// Read-only access to configured schedule entries.
pub trait ScheduleLookup: Send + Sync {
    fn schedule_entry(&self, position_id: &str, day_of_week: u8) -> Option<ScheduleEntry>;
}

pub fn iso_day_of_week(date: NaiveDate) -> u8 {
    date.weekday().number_from_monday() as u8
}

pub fn resolve(
    lookup: &(impl ScheduleLookup + ?Sized),
    position_id: &str,
    date: NaiveDate,
) -> ScheduleResolution {
    match lookup.schedule_entry(position_id, iso_day_of_week(date)) {
        None => ScheduleResolution::Unknown,
        Some(entry) if entry.is_non_working() => ScheduleResolution::NonWorking { entry_id: entry.id },
        Some(entry) => ScheduleResolution::Working {
            window: WorkWindow {
                start: entry.start,
                end: entry.end,
            },
            entry_id: entry.id,
        },
    }
}
