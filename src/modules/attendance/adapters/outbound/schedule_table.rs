// In memory schedule configuration implementing the ScheduleLookup port.
//
// Purpose
// - Hold the (position, weekday) -> window table owned by schedule configuration.
// - Refuse configurations the resolver cannot honour.

use crate::modules::attendance::core::schedule::{ScheduleEntry, ScheduleLookup};
use crate::shared::core::primitives::format_hh_mm;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleConfigError {
    #[error("schedule entry {id}: day of week {day} is outside 1..=7")]
    InvalidDay { id: String, day: u8 },

    #[error("schedule entry {id}: duplicate entry for position {position_id} on day {day}")]
    DuplicateDay {
        id: String,
        position_id: String,
        day: u8,
    },

    #[error("schedule entry {id}: overnight window {start}-{end} is not supported")]
    OvernightWindow { id: String, start: String, end: String },
}

#[derive(Debug, Default, Clone)]
pub struct ScheduleTable {
    entries: HashMap<(String, u8), ScheduleEntry>,
}

impl ScheduleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(
        entries: impl IntoIterator<Item = ScheduleEntry>,
    ) -> Result<Self, ScheduleConfigError> {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry)?;
        }
        Ok(table)
    }

    pub fn insert(&mut self, entry: ScheduleEntry) -> Result<(), ScheduleConfigError> {
        if !(1..=7).contains(&entry.day_of_week) {
            return Err(ScheduleConfigError::InvalidDay {
                id: entry.id,
                day: entry.day_of_week,
            });
        }
        if entry.end < entry.start {
            return Err(ScheduleConfigError::OvernightWindow {
                start: format_hh_mm(&entry.start),
                end: format_hh_mm(&entry.end),
                id: entry.id,
            });
        }
        let key = (entry.position_id.clone(), entry.day_of_week);
        if self.entries.contains_key(&key) {
            return Err(ScheduleConfigError::DuplicateDay {
                id: entry.id,
                position_id: entry.position_id,
                day: entry.day_of_week,
            });
        }
        self.entries.insert(key, entry);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ScheduleLookup for ScheduleTable {
    fn schedule_entry(&self, position_id: &str, day_of_week: u8) -> Option<ScheduleEntry> {
        self.entries
            .get(&(position_id.to_string(), day_of_week))
            .cloned()
    }
}
