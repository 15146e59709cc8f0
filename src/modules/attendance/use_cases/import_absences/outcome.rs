// Result of a batch import.
//
// Every record lands in exactly one of `added` or `skipped`; every source that
// could not be parsed counts once in `file_errors`.

use crate::modules::attendance::core::rejection::RejectionReason;
use crate::modules::attendance::use_cases::import_absences::source::SourceError;
use crate::shared::core::primitives::AbsenceId;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    Incomplete { missing: Vec<String> },
    Rejected { rejection: RejectionReason },
    StoreFailure { message: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Incomplete { missing } => {
                write!(f, "incomplete record, missing {}", missing.join(", "))
            }
            SkipReason::Rejected { rejection } => write!(f, "{rejection}"),
            SkipReason::StoreFailure { message } => write!(f, "store failure: {message}"),
        }
    }
}

impl From<RejectionReason> for SkipReason {
    fn from(rejection: RejectionReason) -> Self {
        SkipReason::Rejected { rejection }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecordStatus {
    Added { absence_id: AbsenceId },
    Skipped { reason: SkipReason },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordOutcome {
    pub origin: String,
    #[serde(flatten)]
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFailure {
    pub name: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportOutcome {
    pub added: usize,
    pub skipped: usize,
    pub file_errors: usize,
    pub records: Vec<RecordOutcome>,
    pub source_failures: Vec<SourceFailure>,
}

impl ImportOutcome {
    pub fn record_added(&mut self, origin: impl Into<String>, absence_id: AbsenceId) {
        self.added += 1;
        self.records.push(RecordOutcome {
            origin: origin.into(),
            status: RecordStatus::Added { absence_id },
        });
    }

    pub fn record_skipped(&mut self, origin: impl Into<String>, reason: SkipReason) {
        self.skipped += 1;
        self.records.push(RecordOutcome {
            origin: origin.into(),
            status: RecordStatus::Skipped { reason },
        });
    }

    pub fn record_file_error(&mut self, error: &SourceError) {
        self.file_errors += 1;
        self.source_failures.push(SourceFailure {
            name: error.source_name().to_string(),
            error: error.to_string(),
        });
    }

    pub fn merge(&mut self, other: ImportOutcome) {
        self.added += other.added;
        self.skipped += other.skipped;
        self.file_errors += other.file_errors;
        self.records.extend(other.records);
        self.source_failures.extend(other.source_failures);
    }

    pub fn skip_reasons(&self) -> impl Iterator<Item = &SkipReason> {
        self.records.iter().filter_map(|record| match &record.status {
            RecordStatus::Skipped { reason } => Some(reason),
            RecordStatus::Added { .. } => None,
        })
    }
}
