use crate::modules::attendance::core::absence::AbsenceCandidate;
use crate::shared::core::primitives::AbsenceId;

/// Whether the candidate creates a new absence or replaces an existing one.
/// Both paths go through the same validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbsenceTarget {
    New,
    Existing(AbsenceId),
}

impl AbsenceTarget {
    pub fn existing_id(&self) -> Option<&str> {
        match self {
            AbsenceTarget::New => None,
            AbsenceTarget::Existing(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordAbsence {
    pub target: AbsenceTarget,
    pub candidate: AbsenceCandidate,
}
