use crate::modules::personnel::core::employee::EmploymentState;
use crate::modules::personnel::core::event::LifecycleEventType;
use crate::modules::personnel::use_cases::change_employee::command::{ChangeEmployee, Confirmation};
use crate::modules::personnel::use_cases::change_employee::decision::TransitionProposal;
use crate::modules::personnel::use_cases::change_employee::handler::{
    ChangeEmployeeHandler, ChangeOutcome,
};
use crate::modules::personnel::use_cases::hire_employee::command::HireEmployee;
use crate::modules::personnel::use_cases::hire_employee::handler::HireEmployeeHandler;
use crate::shared::core::config::EngineConfig;
use crate::shared::infrastructure::personnel_records::{EmployeeDirectory, LifecycleJournal};
use crate::shared::infrastructure::personnel_records::in_memory::InMemoryPersonnelRecords;
use crate::tests::fixtures::employees::EmployeeBuilder;
use chrono::NaiveDate;
use std::sync::Arc;

#[tokio::test]
async fn hires_transfers_and_dismisses_an_employee() {
    let records = Arc::new(InMemoryPersonnelRecords::new());
    let hire = HireEmployeeHandler::new(EngineConfig::default(), records.clone());
    let change = ChangeEmployeeHandler::new(EngineConfig::default(), records.clone());
    let hired = EmployeeBuilder::new().personnel_number("E-4004").build();

    hire.handle(HireEmployee {
        employee: hired.clone(),
        event_date: NaiveDate::from_ymd_opt(2024, 1, 2),
        reason: None,
    })
    .await
    .unwrap();

    let moved = EmployeeBuilder::new()
        .personnel_number("E-4004")
        .department_id("D-OPS")
        .position_id("P-OPS")
        .build();
    let outcome = change
        .apply(
            ChangeEmployee {
                personnel_number: "E-4004".to_string(),
                proposed: moved,
            },
            &|_: &TransitionProposal| Confirmation::Confirmed {
                reason: None,
                event_date: NaiveDate::from_ymd_opt(2024, 2, 1),
            },
        )
        .await
        .unwrap();
    assert!(matches!(outcome, ChangeOutcome::Recorded { .. }));

    let dismissed = EmployeeBuilder::new()
        .personnel_number("E-4004")
        .department_id("D-OPS")
        .position_id("P-OPS")
        .state(EmploymentState::Dismissed)
        .build();
    let declined = change
        .apply(
            ChangeEmployee {
                personnel_number: "E-4004".to_string(),
                proposed: dismissed.clone(),
            },
            &Confirmation::Declined,
        )
        .await
        .unwrap();
    assert!(matches!(declined, ChangeOutcome::Declined { .. }));
    assert_eq!(records.entries_for("E-4004").await.unwrap().len(), 2);

    change
        .apply(
            ChangeEmployee {
                personnel_number: "E-4004".to_string(),
                proposed: dismissed,
            },
            &Confirmation::Confirmed {
                reason: Some("End of contract".to_string()),
                event_date: NaiveDate::from_ymd_opt(2024, 6, 30),
            },
        )
        .await
        .unwrap();

    let journal = records.entries_for("E-4004").await.unwrap();
    let types: Vec<_> = journal.iter().map(|entry| entry.event_type).collect();
    assert_eq!(
        types,
        vec![
            LifecycleEventType::Hire,
            LifecycleEventType::Transfer,
            LifecycleEventType::Dismissal
        ]
    );
    assert_eq!(journal[1].department_id, "D-OPS");
    assert_eq!(journal[2].reason.as_deref(), Some("End of contract"));

    let stored = records.get_employee("E-4004").await.unwrap().unwrap();
    assert_eq!(stored.state, EmploymentState::Dismissed);
}
