// Schedule fixtures shared by resolver, validator and use case tests.
//
// The standard week: Monday to Friday 09:00-18:00, Saturday configured as
// non-working (00:00-00:00), Sunday not configured at all.

use crate::modules::attendance::adapters::outbound::schedule_table::ScheduleTable;
use crate::modules::attendance::core::schedule::ScheduleEntry;
use chrono::{NaiveDate, NaiveTime};

pub fn time(raw: &str) -> NaiveTime {
    NaiveTime::parse_from_str(raw, "%H:%M").unwrap()
}

/// 2024-03-04, a Monday.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
}

pub fn entry(position_id: &str, day_of_week: u8, start: &str, end: &str) -> ScheduleEntry {
    ScheduleEntry {
        id: format!("{position_id}:{day_of_week}"),
        position_id: position_id.to_string(),
        day_of_week,
        start: time(start),
        end: time(end),
    }
}

pub fn standard_week_entries(position_id: &str) -> Vec<ScheduleEntry> {
    let mut entries: Vec<_> = (1..=5)
        .map(|day| entry(position_id, day, "09:00", "18:00"))
        .collect();
    entries.push(entry(position_id, 6, "00:00", "00:00"));
    entries
}

pub fn standard_week_table(position_id: &str) -> ScheduleTable {
    ScheduleTable::from_entries(standard_week_entries(position_id)).unwrap()
}
