// Absence validation against the resolved schedule.
//
// Purpose
// - Turn an untrusted AbsenceCandidate into a NormalizedAbsence, or say why not.
//
// Boundaries
// - Pure. Position resolution and duplicate detection need the stores and are the
//   caller's job; the caller passes the resolved position in.
// - Checks run in a fixed order: reason, date, employee, then the full-day or
//   partial-day branch. The first failing check decides the rejection.

use crate::modules::attendance::core::absence::{AbsenceCandidate, NormalizedAbsence};
use crate::modules::attendance::core::rejection::{InvalidInput, RejectionReason};
use crate::modules::attendance::core::schedule::{
    ScheduleLookup, ScheduleResolution, WorkWindow, resolve,
};
use crate::shared::core::config::EngineConfig;
use crate::shared::core::primitives::{format_hh_mm, parse_hh_mm, parse_iso_date};
use chrono::NaiveTime;

pub fn validate_reason(raw: &str, max_len: usize) -> Result<String, InvalidInput> {
    let reason = raw.trim();
    if reason.is_empty() {
        return Err(InvalidInput::EmptyReason);
    }
    let actual = reason.chars().count();
    if actual > max_len {
        return Err(InvalidInput::ReasonTooLong {
            max: max_len,
            actual,
        });
    }
    Ok(reason.to_string())
}

pub fn validate_absence(
    config: &EngineConfig,
    lookup: &(impl ScheduleLookup + ?Sized),
    position_id: Option<&str>,
    candidate: &AbsenceCandidate,
) -> Result<NormalizedAbsence, RejectionReason> {
    let reason = validate_reason(&candidate.reason, config.max_reason_len)?;
    let date = parse_iso_date(&candidate.date).ok_or_else(|| InvalidInput::MalformedDate {
        value: candidate.date.clone(),
    })?;
    let position_id = position_id.ok_or(RejectionReason::UnknownEmployee)?;

    let (start, end, schedule_entry_id) = if candidate.full_day {
        let (entry_id, window) = working_window(resolve(lookup, position_id, date))?;
        (window.start, window.end, Some(entry_id))
    } else {
        let (start, end) = manual_interval(candidate)?;
        let (_, window) = working_window(resolve(lookup, position_id, date))?;
        if !window.contains(start, end) {
            return Err(RejectionReason::OutOfScheduleWindow);
        }
        (start, end, None)
    };

    Ok(NormalizedAbsence {
        personnel_number: candidate.personnel_number.clone(),
        date,
        full_day: candidate.full_day,
        start,
        end,
        reason,
        schedule_entry_id,
    })
}

fn working_window(resolution: ScheduleResolution) -> Result<(String, WorkWindow), RejectionReason> {
    match resolution {
        ScheduleResolution::Working { entry_id, window } => Ok((entry_id, window)),
        ScheduleResolution::NonWorking { .. } => Err(RejectionReason::NonWorkingDay),
        ScheduleResolution::Unknown => Err(RejectionReason::ScheduleUnknown),
    }
}

fn manual_interval(candidate: &AbsenceCandidate) -> Result<(NaiveTime, NaiveTime), InvalidInput> {
    let (Some(raw_start), Some(raw_end)) = (
        non_blank(candidate.manual_start.as_deref()),
        non_blank(candidate.manual_end.as_deref()),
    ) else {
        return Err(InvalidInput::MissingTime);
    };
    let start = parse_hh_mm(raw_start).ok_or_else(|| InvalidInput::MalformedTime {
        value: raw_start.to_string(),
    })?;
    let end = parse_hh_mm(raw_end).ok_or_else(|| InvalidInput::MalformedTime {
        value: raw_end.to_string(),
    })?;
    if start >= end {
        return Err(InvalidInput::NonIncreasingInterval {
            start: format_hh_mm(&start),
            end: format_hh_mm(&end),
        });
    }
    Ok((start, end))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
