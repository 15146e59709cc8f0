use crate::modules::personnel::core::event::LifecycleEventType;
use crate::shared::core::primitives::{DepartmentId, PersonnelNumber, PositionId};
use crate::shared::infrastructure::personnel_records::PersonnelStoreError;
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChangeRejection {
    #[error("employee {0} not found")]
    UnknownEmployee(PersonnelNumber),

    #[error("personnel number cannot change from {from} to {to}")]
    PersonnelNumberChanged { from: String, to: String },

    #[error("a reason is required to record a {0}")]
    ReasonRequired(LifecycleEventType),

    #[error("reason is {actual} characters, at most {max} allowed")]
    ReasonTooLong { max: usize, actual: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChangeError {
    #[error("change rejected: {0}")]
    Rejected(#[from] ChangeRejection),

    #[error(transparent)]
    Store(#[from] PersonnelStoreError),
}

/// What the user is asked to confirm before a lifecycle event is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionProposal {
    pub event_type: LifecycleEventType,
    pub personnel_number: PersonnelNumber,
    pub employee_name: String,
    pub old_department_id: DepartmentId,
    pub new_department_id: DepartmentId,
    pub old_position_id: PositionId,
    pub new_position_id: PositionId,
    pub suggested_event_date: NaiveDate,
    pub reason_required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum ChangeDecision {
    PlainUpdate,
    RequiresConfirmation(TransitionProposal),
}
