use crate::modules::attendance::adapters::outbound::schedule_table::ScheduleTable;
use crate::modules::attendance::use_cases::import_absences::handler::ImportAbsencesHandler;
use crate::modules::attendance::use_cases::record_absence::handler::RecordAbsenceHandler;
use crate::modules::attendance::use_cases::remove_absence::handler::RemoveAbsenceHandler;
use crate::modules::personnel::use_cases::change_employee::handler::ChangeEmployeeHandler;
use crate::modules::personnel::use_cases::hire_employee::handler::HireEmployeeHandler;
use crate::shared::core::config::EngineConfig;
use crate::shared::infrastructure::absence_store::AbsenceStore;
use crate::shared::infrastructure::absence_store::in_memory::InMemoryAbsenceStore;
use crate::shared::infrastructure::personnel_records::LifecycleJournal;
use crate::shared::infrastructure::personnel_records::in_memory::InMemoryPersonnelRecords;
use std::sync::Arc;

type Absences = InMemoryAbsenceStore;
type Personnel = InMemoryPersonnelRecords;

#[derive(Clone)]
pub struct AppState {
    pub absences: Arc<dyn AbsenceStore>,
    pub journal: Arc<dyn LifecycleJournal>,
    pub record_absence: Arc<RecordAbsenceHandler<Absences, Personnel, ScheduleTable>>,
    pub remove_absence: Arc<RemoveAbsenceHandler<Absences>>,
    pub import_absences: Arc<ImportAbsencesHandler<Absences, Personnel, ScheduleTable>>,
    pub change_employee: Arc<ChangeEmployeeHandler<Personnel>>,
    pub hire_employee: Arc<HireEmployeeHandler<Personnel>>,
}

impl AppState {
    pub fn new(
        config: EngineConfig,
        absences: Arc<Absences>,
        personnel: Arc<Personnel>,
        schedule: Arc<ScheduleTable>,
    ) -> Self {
        Self {
            absences: absences.clone(),
            journal: personnel.clone(),
            record_absence: Arc::new(RecordAbsenceHandler::new(
                config.clone(),
                absences.clone(),
                personnel.clone(),
                schedule.clone(),
            )),
            remove_absence: Arc::new(RemoveAbsenceHandler::new(absences.clone())),
            import_absences: Arc::new(ImportAbsencesHandler::new(
                config.clone(),
                absences,
                personnel.clone(),
                schedule,
            )),
            change_employee: Arc::new(ChangeEmployeeHandler::new(
                config.clone(),
                personnel.clone(),
            )),
            hire_employee: Arc::new(HireEmployeeHandler::new(config, personnel)),
        }
    }
}
