// Shared primitives for the personnel records engine.
//
// Purpose
// - Name the identifiers that flow between modules.
// - Provide the strict date and time-of-day parsing every inbound path goes through.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

/// Unique, immutable employee identifier.
pub type PersonnelNumber = String;
pub type PositionId = String;
pub type DepartmentId = String;
pub type AbsenceId = String;
pub type ScheduleEntryId = String;
pub type JournalEntryId = String;

static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static HH_MM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap());

pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

/// Parses `YYYY-MM-DD`. Anything chrono would accept loosely (single digit
/// months, surrounding text) is refused.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if !ISO_DATE.is_match(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parses a strict 24-hour `HH:MM` time of day.
pub fn parse_hh_mm(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    if !HH_MM.is_match(raw) {
        return None;
    }
    NaiveTime::parse_from_str(raw, "%H:%M").ok()
}

pub fn format_hh_mm(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Serde adapter storing a `NaiveTime` as `HH:MM`.
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hh_mm(time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_hh_mm(&raw)
            .ok_or_else(|| D::Error::custom(format!("expected HH:MM, got {raw:?}")))
    }
}

#[cfg(test)]
mod primitives_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2024-03-04", Some((2024, 3, 4)))]
    #[case(" 2024-03-04 ", Some((2024, 3, 4)))]
    #[case("2024-02-30", None)]
    #[case("2024-3-4", None)]
    #[case("04.03.2024", None)]
    #[case("", None)]
    fn it_should_parse_strict_iso_dates(#[case] raw: &str, #[case] expected: Option<(i32, u32, u32)>) {
        let expected = expected.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert_eq!(parse_iso_date(raw), expected);
    }

    #[rstest]
    #[case("09:00", Some((9, 0)))]
    #[case("23:59", Some((23, 59)))]
    #[case("00:00", Some((0, 0)))]
    #[case("9:00", None)]
    #[case("24:00", None)]
    #[case("12:60", None)]
    #[case("12:00:00", None)]
    #[case("noon", None)]
    fn it_should_parse_strict_hh_mm(#[case] raw: &str, #[case] expected: Option<(u32, u32)>) {
        let expected = expected.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap());
        assert_eq!(parse_hh_mm(raw), expected);
    }

    #[rstest]
    fn it_should_generate_distinct_ids() {
        assert_ne!(new_id(), new_id());
    }
}
