// Typed, recoverable rejections produced while validating absences.
//
// None of these are faults: validators return them as values and callers decide
// the user facing message. Store failures live with the ports, not here.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum RejectionReason {
    #[error("invalid input: {0}")]
    InvalidInput(InvalidInput),

    #[error("no schedule configured for this day")]
    ScheduleUnknown,

    #[error("the schedule marks this day as non-working")]
    NonWorkingDay,

    #[error("the interval lies outside the scheduled working window")]
    OutOfScheduleWindow,

    #[error("an absence already exists for this employee and date")]
    Duplicate,

    #[error("the employee cannot be resolved to a position")]
    UnknownEmployee,
}

#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "detail", rename_all = "snake_case")]
pub enum InvalidInput {
    #[error("reason must not be empty")]
    EmptyReason,

    #[error("reason is {actual} characters, at most {max} allowed")]
    ReasonTooLong { max: usize, actual: usize },

    #[error("{value:?} is not a YYYY-MM-DD date")]
    MalformedDate { value: String },

    #[error("a partial-day absence needs both start and end times")]
    MissingTime,

    #[error("{value:?} is not a HH:MM time")]
    MalformedTime { value: String },

    #[error("start {start} must be before end {end}")]
    NonIncreasingInterval { start: String, end: String },

    #[error("{value:?} is not a recognised full-day flag")]
    MalformedFlag { value: String },
}

impl From<InvalidInput> for RejectionReason {
    fn from(value: InvalidInput) -> Self {
        RejectionReason::InvalidInput(value)
    }
}
