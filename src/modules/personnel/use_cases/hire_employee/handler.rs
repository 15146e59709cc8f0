use crate::modules::personnel::core::employee::EmploymentState;
use crate::modules::personnel::core::event::{LifecycleEventType, LifecycleJournalEntry};
use crate::modules::personnel::use_cases::hire_employee::command::HireEmployee;
use crate::shared::core::config::EngineConfig;
use crate::shared::core::primitives::{PersonnelNumber, new_id};
use crate::shared::infrastructure::personnel_records::{PersonnelRecords, PersonnelStoreError};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HireRejection {
    #[error("personnel number must not be empty")]
    EmptyPersonnelNumber,

    #[error("employee {0} is already registered")]
    AlreadyRegistered(PersonnelNumber),

    #[error("a new hire must be active")]
    NotActive,

    #[error("reason is {actual} characters, at most {max} allowed")]
    ReasonTooLong { max: usize, actual: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HireError {
    #[error("hire rejected: {0}")]
    Rejected(#[from] HireRejection),

    #[error(transparent)]
    Store(PersonnelStoreError),
}

impl From<PersonnelStoreError> for HireError {
    fn from(value: PersonnelStoreError) -> Self {
        match value {
            PersonnelStoreError::AlreadyExists(pn) => {
                HireError::Rejected(HireRejection::AlreadyRegistered(pn))
            }
            other => HireError::Store(other),
        }
    }
}

pub struct HireEmployeeHandler<TRecords>
where
    TRecords: PersonnelRecords + 'static,
{
    config: EngineConfig,
    records: Arc<TRecords>,
}

impl<TRecords> HireEmployeeHandler<TRecords>
where
    TRecords: PersonnelRecords + 'static,
{
    pub fn new(config: EngineConfig, records: Arc<TRecords>) -> Self {
        Self { config, records }
    }

    /// Registers the employee together with the initial `Hire` journal entry.
    pub async fn handle(&self, command: HireEmployee) -> Result<LifecycleJournalEntry, HireError> {
        let personnel_number = command.employee.personnel_number.clone();
        let result = self.hire(command).await;
        match &result {
            Ok(entry) => info!(%personnel_number, event_date = %entry.event_date, "employee hired"),
            Err(HireError::Rejected(reason)) => warn!(%personnel_number, %reason, "hire rejected"),
            Err(e) => error!(error = %e, %personnel_number, "failed to hire employee"),
        }
        result
    }

    async fn hire(&self, command: HireEmployee) -> Result<LifecycleJournalEntry, HireError> {
        let HireEmployee {
            employee,
            event_date,
            reason,
        } = command;
        if employee.personnel_number.trim().is_empty() {
            return Err(HireRejection::EmptyPersonnelNumber.into());
        }
        if employee.state != EmploymentState::Active {
            return Err(HireRejection::NotActive.into());
        }
        let reason = reason
            .as_deref()
            .map(str::trim)
            .filter(|reason| !reason.is_empty())
            .map(String::from);
        if let Some(actual) = reason.as_ref().map(|reason| reason.chars().count())
            && actual > self.config.max_reason_len
        {
            return Err(HireRejection::ReasonTooLong {
                max: self.config.max_reason_len,
                actual,
            }
            .into());
        }

        let entry = LifecycleJournalEntry {
            id: new_id(),
            personnel_number: employee.personnel_number.clone(),
            event_type: LifecycleEventType::Hire,
            event_date: event_date.unwrap_or_else(|| Utc::now().date_naive()),
            department_id: employee.department_id.clone(),
            position_id: employee.position_id.clone(),
            reason,
            recorded_at: Utc::now(),
        };
        self.records
            .register_employee(employee, entry.clone())
            .await?;
        Ok(entry)
    }
}
