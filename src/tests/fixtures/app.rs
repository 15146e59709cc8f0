// Fully wired application state over in memory infrastructure.
// Seeds E-1001 and E-2002 on P-DEV with the standard week schedule.

use crate::shared::core::config::EngineConfig;
use crate::shared::infrastructure::absence_store::in_memory::InMemoryAbsenceStore;
use crate::shared::infrastructure::personnel_records::in_memory::InMemoryPersonnelRecords;
use crate::shell::state::AppState;
use crate::tests::fixtures::employees::EmployeeBuilder;
use crate::tests::fixtures::schedules::standard_week_table;
use std::sync::Arc;

pub struct Harness {
    pub state: AppState,
    pub absences: Arc<InMemoryAbsenceStore>,
    pub personnel: Arc<InMemoryPersonnelRecords>,
}

impl Harness {
    pub fn new() -> Self {
        let absences = Arc::new(InMemoryAbsenceStore::new());
        let personnel = Arc::new(InMemoryPersonnelRecords::with_employees([
            EmployeeBuilder::new().build(),
            EmployeeBuilder::new()
                .personnel_number("E-2002")
                .last_name("Hopper")
                .build(),
        ]));
        let state = AppState::new(
            EngineConfig::default(),
            absences.clone(),
            personnel.clone(),
            Arc::new(standard_week_table("P-DEV")),
        );
        Self {
            state,
            absences,
            personnel,
        }
    }
}
