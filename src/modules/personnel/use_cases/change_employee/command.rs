use crate::modules::personnel::core::employee::Employee;
use crate::modules::personnel::use_cases::change_employee::decision::TransitionProposal;
use crate::shared::core::primitives::PersonnelNumber;
use chrono::NaiveDate;
use serde::Deserialize;

/// A proposed new version of the employee record identified by `personnel_number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEmployee {
    pub personnel_number: PersonnelNumber,
    pub proposed: Employee,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Confirmation {
    Confirmed {
        #[serde(default)]
        reason: Option<String>,
        /// Defaults to the suggested date of the proposal.
        #[serde(default)]
        event_date: Option<NaiveDate>,
    },
    Declined,
}

/// The point where a user confirms or declines a classified transition.
pub trait TransitionConfirmation: Send + Sync {
    fn confirm(&self, proposal: &TransitionProposal) -> Confirmation;
}

/// An answer given up front, e.g. as part of an HTTP request.
impl TransitionConfirmation for Confirmation {
    fn confirm(&self, _proposal: &TransitionProposal) -> Confirmation {
        self.clone()
    }
}

impl<F> TransitionConfirmation for F
where
    F: Fn(&TransitionProposal) -> Confirmation + Send + Sync,
{
    fn confirm(&self, proposal: &TransitionProposal) -> Confirmation {
        self(proposal)
    }
}
