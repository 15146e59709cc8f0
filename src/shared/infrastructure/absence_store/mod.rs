use crate::modules::attendance::core::absence::{Absence, NormalizedAbsence};
use crate::shared::core::primitives::{AbsenceId, PersonnelNumber};
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AbsenceStoreError {
    #[error("absence {0} not found")]
    NotFound(AbsenceId),

    #[error("absence already recorded for {personnel_number} on {date}")]
    Conflict {
        personnel_number: PersonnelNumber,
        date: NaiveDate,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Persistence for absences. At most one absence exists per (employee, date);
/// `insert` and `update` refuse to break that with `Conflict`.
#[async_trait]
pub trait AbsenceStore: Send + Sync {
    async fn exists(&self, personnel_number: &str, date: NaiveDate)
    -> Result<bool, AbsenceStoreError>;

    async fn find_for(
        &self,
        personnel_number: &str,
        date: NaiveDate,
    ) -> Result<Option<Absence>, AbsenceStoreError>;

    async fn insert(&self, absence: NormalizedAbsence) -> Result<AbsenceId, AbsenceStoreError>;

    async fn update(&self, id: &str, absence: NormalizedAbsence) -> Result<(), AbsenceStoreError>;

    async fn delete(&self, id: &str) -> Result<(), AbsenceStoreError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Absence>, AbsenceStoreError>;

    /// Ordered by date.
    async fn list_for_employee(&self, personnel_number: &str)
    -> Result<Vec<Absence>, AbsenceStoreError>;
}

pub mod in_memory;
