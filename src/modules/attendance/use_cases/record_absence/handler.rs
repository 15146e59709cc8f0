use crate::modules::attendance::core::absence::Absence;
use crate::modules::attendance::core::rejection::RejectionReason;
use crate::modules::attendance::core::schedule::ScheduleLookup;
use crate::modules::attendance::core::validate::validate_absence;
use crate::modules::attendance::use_cases::record_absence::command::{AbsenceTarget, RecordAbsence};
use crate::shared::core::config::EngineConfig;
use crate::shared::core::primitives::AbsenceId;
use crate::shared::infrastructure::absence_store::{AbsenceStore, AbsenceStoreError};
use crate::shared::infrastructure::personnel_records::{EmployeeDirectory, PersonnelStoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("rejected: {0}")]
    Rejected(#[from] RejectionReason),

    #[error("absence {0} not found")]
    NotFound(AbsenceId),

    #[error(transparent)]
    AbsenceStore(AbsenceStoreError),

    #[error(transparent)]
    PersonnelStore(#[from] PersonnelStoreError),
}

impl From<AbsenceStoreError> for ApplicationError {
    fn from(value: AbsenceStoreError) -> Self {
        match value {
            AbsenceStoreError::NotFound(id) => ApplicationError::NotFound(id),
            AbsenceStoreError::Conflict { .. } => {
                ApplicationError::Rejected(RejectionReason::Duplicate)
            }
            other => ApplicationError::AbsenceStore(other),
        }
    }
}

pub struct RecordAbsenceHandler<TStore, TDirectory, TSchedule>
where
    TStore: AbsenceStore + 'static,
    TDirectory: EmployeeDirectory + 'static,
    TSchedule: ScheduleLookup + 'static,
{
    config: EngineConfig,
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
    schedule: Arc<TSchedule>,
}

impl<TStore, TDirectory, TSchedule> RecordAbsenceHandler<TStore, TDirectory, TSchedule>
where
    TStore: AbsenceStore + 'static,
    TDirectory: EmployeeDirectory + 'static,
    TSchedule: ScheduleLookup + 'static,
{
    pub fn new(
        config: EngineConfig,
        store: Arc<TStore>,
        directory: Arc<TDirectory>,
        schedule: Arc<TSchedule>,
    ) -> Self {
        Self {
            config,
            store,
            directory,
            schedule,
        }
    }

    pub async fn handle(&self, command: RecordAbsence) -> Result<Absence, ApplicationError> {
        let personnel_number = command.candidate.personnel_number.clone();
        let result = self.record(command).await;
        match &result {
            Ok(absence) => info!(
                absence_id = %absence.id,
                personnel_number = %absence.personnel_number,
                date = %absence.date,
                full_day = absence.full_day,
                "absence recorded"
            ),
            Err(ApplicationError::Rejected(reason)) => {
                warn!(%personnel_number, %reason, "absence rejected")
            }
            Err(ApplicationError::NotFound(id)) => {
                warn!(%personnel_number, absence_id = %id, "absence to update not found")
            }
            Err(e) => error!(error = %e, %personnel_number, "failed to record absence"),
        }
        result
    }

    async fn record(&self, command: RecordAbsence) -> Result<Absence, ApplicationError> {
        let RecordAbsence { target, candidate } = command;

        if let AbsenceTarget::Existing(id) = &target
            && self.store.get_by_id(id).await?.is_none()
        {
            return Err(ApplicationError::NotFound(id.clone()));
        }

        let position = self.directory.position_of(&candidate.personnel_number).await?;
        let normalized =
            validate_absence(&self.config, &*self.schedule, position.as_deref(), &candidate)?;

        if let Some(existing) = self
            .store
            .find_for(&normalized.personnel_number, normalized.date)
            .await?
            && target.existing_id() != Some(existing.id.as_str())
        {
            return Err(RejectionReason::Duplicate.into());
        }

        let id = match target {
            AbsenceTarget::New => self.store.insert(normalized.clone()).await?,
            AbsenceTarget::Existing(id) => {
                self.store.update(&id, normalized.clone()).await?;
                id
            }
        };
        Ok(Absence::from_normalized(id, normalized))
    }
}
