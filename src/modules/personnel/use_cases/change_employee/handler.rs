// Employee edit workflow.
//
// Responsibilities
// - Classify a proposed change against the stored record before anything is written.
// - Ask for confirmation only when a lifecycle transition is classified.
// - Commit the employee update and its journal entry as one store operation.

use crate::modules::personnel::core::employee::Employee;
use crate::modules::personnel::core::event::LifecycleJournalEntry;
use crate::modules::personnel::use_cases::change_employee::command::{
    ChangeEmployee, Confirmation, TransitionConfirmation,
};
use crate::modules::personnel::use_cases::change_employee::decide::{
    confirmed_reason, decide_change,
};
use crate::modules::personnel::use_cases::change_employee::decision::{
    ChangeDecision, ChangeError, ChangeRejection, TransitionProposal,
};
use crate::shared::core::config::EngineConfig;
use crate::shared::core::primitives::new_id;
use crate::shared::infrastructure::personnel_records::{EmployeeDirectory, PersonnelRecords};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ChangeOutcome {
    Updated {
        employee: Employee,
    },
    Recorded {
        employee: Employee,
        entry: LifecycleJournalEntry,
    },
    /// Nothing was written.
    Declined {
        proposal: TransitionProposal,
    },
}

pub struct ChangeEmployeeHandler<TRecords>
where
    TRecords: PersonnelRecords + 'static,
{
    config: EngineConfig,
    records: Arc<TRecords>,
}

impl<TRecords> ChangeEmployeeHandler<TRecords>
where
    TRecords: PersonnelRecords + 'static,
{
    pub fn new(config: EngineConfig, records: Arc<TRecords>) -> Self {
        Self { config, records }
    }

    /// Classifies the change without writing anything.
    pub async fn propose(&self, command: &ChangeEmployee) -> Result<ChangeDecision, ChangeError> {
        let current = self.current(&command.personnel_number).await?;
        Ok(decide_change(
            &current,
            &command.proposed,
            Utc::now().date_naive(),
        )?)
    }

    pub async fn apply(
        &self,
        command: ChangeEmployee,
        confirmation: &(impl TransitionConfirmation + ?Sized),
    ) -> Result<ChangeOutcome, ChangeError> {
        let personnel_number = command.personnel_number.clone();
        let result = self.commit(command, confirmation).await;
        match &result {
            Ok(ChangeOutcome::Updated { .. }) => info!(%personnel_number, "employee updated"),
            Ok(ChangeOutcome::Recorded { entry, .. }) => info!(
                %personnel_number,
                event_type = %entry.event_type,
                event_date = %entry.event_date,
                "employee updated with lifecycle event"
            ),
            Ok(ChangeOutcome::Declined { proposal }) => info!(
                %personnel_number,
                event_type = %proposal.event_type,
                "lifecycle transition declined, nothing written"
            ),
            Err(ChangeError::Rejected(reason)) => {
                warn!(%personnel_number, %reason, "employee change rejected")
            }
            Err(e) => error!(error = %e, %personnel_number, "failed to change employee"),
        }
        result
    }

    async fn commit(
        &self,
        command: ChangeEmployee,
        confirmation: &(impl TransitionConfirmation + ?Sized),
    ) -> Result<ChangeOutcome, ChangeError> {
        let current = self.current(&command.personnel_number).await?;
        let today = Utc::now().date_naive();
        let proposed = command.proposed;

        let proposal = match decide_change(&current, &proposed, today)? {
            ChangeDecision::PlainUpdate => {
                self.records.commit_change(proposed.clone(), None).await?;
                return Ok(ChangeOutcome::Updated { employee: proposed });
            }
            ChangeDecision::RequiresConfirmation(proposal) => proposal,
        };

        let (reason, event_date) = match confirmation.confirm(&proposal) {
            Confirmation::Declined => return Ok(ChangeOutcome::Declined { proposal }),
            Confirmation::Confirmed { reason, event_date } => (reason, event_date),
        };
        let reason = confirmed_reason(
            proposal.event_type,
            reason.as_deref(),
            self.config.max_reason_len,
        )?;

        let entry = LifecycleJournalEntry {
            id: new_id(),
            personnel_number: proposed.personnel_number.clone(),
            event_type: proposal.event_type,
            event_date: event_date.unwrap_or(proposal.suggested_event_date),
            department_id: proposed.department_id.clone(),
            position_id: proposed.position_id.clone(),
            reason,
            recorded_at: Utc::now(),
        };
        self.records
            .commit_change(proposed.clone(), Some(entry.clone()))
            .await?;
        Ok(ChangeOutcome::Recorded {
            employee: proposed,
            entry,
        })
    }

    async fn current(&self, personnel_number: &str) -> Result<Employee, ChangeError> {
        self.records
            .get_employee(personnel_number)
            .await?
            .ok_or_else(|| ChangeRejection::UnknownEmployee(personnel_number.to_string()).into())
    }
}

#[cfg(test)]
mod change_employee_handler_tests {
    use super::*;
    use crate::modules::personnel::core::employee::EmploymentState;
    use crate::modules::personnel::core::event::LifecycleEventType;
    use crate::shared::infrastructure::personnel_records::in_memory::InMemoryPersonnelRecords;
    use crate::shared::infrastructure::personnel_records::{
        EmployeeDirectory, LifecycleJournal, PersonnelStoreError,
    };
    use crate::tests::fixtures::employees::EmployeeBuilder;
    use crate::tests::fixtures::schedules::monday;
    use rstest::{fixture, rstest};
    use std::sync::atomic::{AtomicUsize, Ordering};

    type BeforeEachReturn = (
        ChangeEmployeeHandler<InMemoryPersonnelRecords>,
        Arc<InMemoryPersonnelRecords>,
    );

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let records = Arc::new(InMemoryPersonnelRecords::with_employees([
            EmployeeBuilder::new().build(),
        ]));
        let handler = ChangeEmployeeHandler::new(EngineConfig::default(), records.clone());
        (handler, records)
    }

    fn change(proposed: Employee) -> ChangeEmployee {
        ChangeEmployee {
            personnel_number: "E-1001".to_string(),
            proposed,
        }
    }

    fn confirmed(reason: Option<&str>) -> Confirmation {
        Confirmation::Confirmed {
            reason: reason.map(String::from),
            event_date: Some(monday()),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_propose_without_writing(before_each: BeforeEachReturn) {
        let (handler, records) = before_each;
        let command = change(EmployeeBuilder::new().state(EmploymentState::Dismissed).build());
        let decision = handler.propose(&command).await.unwrap();
        assert!(matches!(
            decision,
            ChangeDecision::RequiresConfirmation(TransitionProposal {
                event_type: LifecycleEventType::Dismissal,
                ..
            })
        ));
        let stored = records.get_employee("E-1001").await.unwrap().unwrap();
        assert_eq!(stored.state, EmploymentState::Active);
        assert_eq!(records.journal_len().await, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_record_a_confirmed_dismissal_with_its_reason(
        before_each: BeforeEachReturn,
    ) {
        let (handler, records) = before_each;
        let command = change(EmployeeBuilder::new().state(EmploymentState::Dismissed).build());
        let outcome = handler
            .apply(command, &confirmed(Some("Restructuring")))
            .await
            .expect("apply failed");
        let ChangeOutcome::Recorded { entry, .. } = outcome else {
            panic!("expected a recorded event, got {outcome:?}");
        };
        assert_eq!(entry.event_type, LifecycleEventType::Dismissal);
        assert_eq!(entry.reason.as_deref(), Some("Restructuring"));
        assert_eq!(entry.event_date, monday());
        assert_eq!(records.entries_for("E-1001").await.unwrap(), vec![entry]);
        let placement = records.placement_of("E-1001").await.unwrap().unwrap();
        assert_eq!(placement.state, EmploymentState::Dismissed);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_write_nothing_when_the_transition_is_declined(
        before_each: BeforeEachReturn,
    ) {
        let (handler, records) = before_each;
        let command = change(EmployeeBuilder::new().department_id("D-OPS").build());
        let outcome = handler.apply(command, &Confirmation::Declined).await.unwrap();
        assert!(matches!(outcome, ChangeOutcome::Declined { .. }));
        let stored = records.get_employee("E-1001").await.unwrap().unwrap();
        assert_eq!(stored.department_id, "D-ENG");
        assert_eq!(records.journal_len().await, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_a_dismissal_without_a_reason(before_each: BeforeEachReturn) {
        let (handler, records) = before_each;
        let command = change(EmployeeBuilder::new().state(EmploymentState::Dismissed).build());
        let result = handler.apply(command, &confirmed(None)).await;
        assert_eq!(
            result,
            Err(ChangeError::Rejected(ChangeRejection::ReasonRequired(
                LifecycleEventType::Dismissal
            )))
        );
        assert_eq!(records.journal_len().await, 0);
        let stored = records.get_employee("E-1001").await.unwrap().unwrap();
        assert_eq!(stored.state, EmploymentState::Active);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_an_over_long_transfer_reason(before_each: BeforeEachReturn) {
        let (handler, _) = before_each;
        let command = change(EmployeeBuilder::new().position_id("P-OPS").build());
        let reason = "a".repeat(201);
        let result = handler.apply(command, &confirmed(Some(&reason))).await;
        assert!(matches!(
            result,
            Err(ChangeError::Rejected(ChangeRejection::ReasonTooLong { .. }))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_commit_plain_updates_without_asking(before_each: BeforeEachReturn) {
        let (handler, records) = before_each;
        let asked = AtomicUsize::new(0);
        let confirmation = |_: &TransitionProposal| {
            asked.fetch_add(1, Ordering::SeqCst);
            Confirmation::Declined
        };
        let command = change(EmployeeBuilder::new().last_name("King").build());
        let outcome = handler.apply(command, &confirmation).await.unwrap();
        assert!(matches!(outcome, ChangeOutcome::Updated { .. }));
        assert_eq!(asked.load(Ordering::SeqCst), 0);
        let stored = records.get_employee("E-1001").await.unwrap().unwrap();
        assert_eq!(stored.last_name, "King");
        assert_eq!(records.journal_len().await, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_ask_with_the_classified_proposal(before_each: BeforeEachReturn) {
        let (handler, _) = before_each;
        let confirmation = |proposal: &TransitionProposal| {
            assert_eq!(proposal.event_type, LifecycleEventType::Suspension);
            assert_eq!(proposal.personnel_number, "E-1001");
            Confirmation::Confirmed {
                reason: None,
                event_date: None,
            }
        };
        let command = change(EmployeeBuilder::new().state(EmploymentState::Unavailable).build());
        let outcome = handler.apply(command, &confirmation).await.unwrap();
        let ChangeOutcome::Recorded { entry, .. } = outcome else {
            panic!("expected a recorded event");
        };
        assert_eq!(entry.event_type, LifecycleEventType::Suspension);
        assert_eq!(entry.reason, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_changing_the_personnel_number(before_each: BeforeEachReturn) {
        let (handler, _) = before_each;
        let command = change(EmployeeBuilder::new().personnel_number("E-2002").build());
        let result = handler.apply(command, &Confirmation::Declined).await;
        assert!(matches!(
            result,
            Err(ChangeError::Rejected(ChangeRejection::PersonnelNumberChanged { .. }))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_an_unknown_employee(before_each: BeforeEachReturn) {
        let (handler, _) = before_each;
        let command = ChangeEmployee {
            personnel_number: "E-9999".into(),
            proposed: EmployeeBuilder::new().personnel_number("E-9999").build(),
        };
        assert_eq!(
            handler.propose(&command).await,
            Err(ChangeError::Rejected(ChangeRejection::UnknownEmployee(
                "E-9999".into()
            )))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_surface_store_failures(before_each: BeforeEachReturn) {
        let (handler, records) = before_each;
        records.toggle_offline();
        let command = change(EmployeeBuilder::new().last_name("King").build());
        let result = handler.apply(command, &Confirmation::Declined).await;
        assert_eq!(
            result,
            Err(ChangeError::Store(PersonnelStoreError::Backend(
                "Personnel records offline".into()
            )))
        );
    }
}
