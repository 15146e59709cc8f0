// Batch import reconciler.
//
// Purpose
// - Add absences from external records, skipping the ones that cannot be added,
//   and report what happened to each of them.
//
// Responsibilities
// - Process records sequentially and independently. One bad record never aborts the batch.
// - Apply the same validation as interactive registration.
// - Count store failures on a record as a skip and continue.

use crate::modules::attendance::core::absence::AbsenceCandidate;
use crate::modules::attendance::core::rejection::{InvalidInput, RejectionReason};
use crate::modules::attendance::core::schedule::ScheduleLookup;
use crate::modules::attendance::core::validate::validate_absence;
use crate::modules::attendance::use_cases::import_absences::outcome::{ImportOutcome, SkipReason};
use crate::modules::attendance::use_cases::import_absences::source::{
    ABSENCE_DATE, END_TIME, FULL_DAY, ImportSource, PERSONNEL_NUMBER, REASON, REQUIRED_FIELDS,
    RawRecord, START_TIME,
};
use crate::shared::core::config::EngineConfig;
use crate::shared::core::primitives::AbsenceId;
use crate::shared::infrastructure::absence_store::{AbsenceStore, AbsenceStoreError};
use crate::shared::infrastructure::personnel_records::EmployeeDirectory;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct ImportAbsencesHandler<TStore, TDirectory, TSchedule>
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

impl<TStore, TDirectory, TSchedule> ImportAbsencesHandler<TStore, TDirectory, TSchedule>
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

    pub async fn import_batch(&self, records: Vec<RawRecord>) -> ImportOutcome {
        let mut outcome = ImportOutcome::default();
        for record in records {
            match self.reconcile(&record).await {
                Ok(absence_id) => outcome.record_added(record.origin, absence_id),
                Err(reason) => {
                    match &reason {
                        SkipReason::StoreFailure { message } => {
                            error!(origin = %record.origin, error = %message, "store failure while importing absence")
                        }
                        _ => warn!(origin = %record.origin, %reason, "absence record skipped"),
                    }
                    outcome.record_skipped(record.origin, reason);
                }
            }
        }
        info!(
            added = outcome.added,
            skipped = outcome.skipped,
            "absence batch reconciled"
        );
        outcome
    }

    /// Parses and imports each source in turn. A source that cannot be parsed
    /// contributes one file error and nothing else.
    pub async fn import_sources(&self, sources: Vec<ImportSource>) -> ImportOutcome {
        let mut outcome = ImportOutcome::default();
        for source in sources {
            match source.records(&self.config.import) {
                Ok(records) => outcome.merge(self.import_batch(records).await),
                Err(e) => {
                    warn!(error = %e, source = %source.name, "import source rejected");
                    outcome.record_file_error(&e);
                }
            }
        }
        outcome
    }

    pub async fn import_files(&self, paths: &[impl AsRef<Path>]) -> ImportOutcome {
        let mut outcome = ImportOutcome::default();
        let mut sources = Vec::new();
        for path in paths {
            match ImportSource::read(path).await {
                Ok(source) => sources.push(source),
                Err(e) => {
                    warn!(error = %e, "import file unreadable");
                    outcome.record_file_error(&e);
                }
            }
        }
        outcome.merge(self.import_sources(sources).await);
        outcome
    }

    async fn reconcile(&self, record: &RawRecord) -> Result<AbsenceId, SkipReason> {
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| record.get(field).is_none())
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(SkipReason::Incomplete { missing });
        }

        let personnel_number = record.get(PERSONNEL_NUMBER).unwrap_or_default();
        let raw_flag = record.get(FULL_DAY).unwrap_or_default();
        let full_day = self.config.import.parse_flag(raw_flag).ok_or_else(|| {
            RejectionReason::from(InvalidInput::MalformedFlag {
                value: raw_flag.to_string(),
            })
        })?;

        let position = self
            .directory
            .position_of(personnel_number)
            .await
            .map_err(store_failure)?
            .ok_or(RejectionReason::UnknownEmployee)?;

        let candidate = AbsenceCandidate {
            personnel_number: personnel_number.to_string(),
            date: record.get(ABSENCE_DATE).unwrap_or_default().to_string(),
            full_day,
            reason: record.get(REASON).unwrap_or_default().to_string(),
            manual_start: record.get(START_TIME).map(String::from),
            manual_end: record.get(END_TIME).map(String::from),
        };
        let normalized =
            validate_absence(&self.config, &*self.schedule, Some(&position), &candidate)?;

        if self
            .store
            .exists(&normalized.personnel_number, normalized.date)
            .await
            .map_err(store_failure)?
        {
            return Err(RejectionReason::Duplicate.into());
        }

        match self.store.insert(normalized).await {
            Ok(id) => Ok(id),
            Err(AbsenceStoreError::Conflict { .. }) => Err(RejectionReason::Duplicate.into()),
            Err(e) => Err(store_failure(e)),
        }
    }
}

fn store_failure(error: impl ToString) -> SkipReason {
    SkipReason::StoreFailure {
        message: error.to_string(),
    }
}
