use crate::modules::personnel::core::employee::{Employee, Placement};
use crate::modules::personnel::core::event::LifecycleJournalEntry;
use crate::shared::core::primitives::{PersonnelNumber, PositionId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersonnelStoreError {
    #[error("employee {0} not found")]
    NotFound(PersonnelNumber),

    #[error("employee {0} already registered")]
    AlreadyExists(PersonnelNumber),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn get_employee(
        &self,
        personnel_number: &str,
    ) -> Result<Option<Employee>, PersonnelStoreError>;

    async fn position_of(
        &self,
        personnel_number: &str,
    ) -> Result<Option<PositionId>, PersonnelStoreError> {
        Ok(self
            .get_employee(personnel_number)
            .await?
            .map(|employee| employee.position_id))
    }

    async fn placement_of(
        &self,
        personnel_number: &str,
    ) -> Result<Option<Placement>, PersonnelStoreError> {
        Ok(self
            .get_employee(personnel_number)
            .await?
            .map(|employee| employee.placement()))
    }
}

#[async_trait]
pub trait LifecycleJournal: Send + Sync {
    /// Oldest first.
    async fn entries_for(
        &self,
        personnel_number: &str,
    ) -> Result<Vec<LifecycleJournalEntry>, PersonnelStoreError>;
}

/// Writes that touch both the employee record and the journal. Each call is
/// one atomic unit: either everything is stored or nothing is.
#[async_trait]
pub trait PersonnelRecords: EmployeeDirectory + LifecycleJournal {
    async fn register_employee(
        &self,
        employee: Employee,
        hire: LifecycleJournalEntry,
    ) -> Result<(), PersonnelStoreError>;

    async fn commit_change(
        &self,
        employee: Employee,
        entry: Option<LifecycleJournalEntry>,
    ) -> Result<(), PersonnelStoreError>;
}

pub mod in_memory;
