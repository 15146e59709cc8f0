// In memory implementation of the personnel ports.
//
// Purpose
// - Back the employee workflows in tests and local development.
//
// Responsibilities
// - Keep employees and the lifecycle journal behind a single lock, so an
//   employee update and its journal entry land together or not at all.

use crate::modules::personnel::core::employee::Employee;
use crate::modules::personnel::core::event::LifecycleJournalEntry;
use crate::shared::core::primitives::PersonnelNumber;
use crate::shared::infrastructure::personnel_records::{
    EmployeeDirectory, LifecycleJournal, PersonnelRecords, PersonnelStoreError,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
struct Records {
    employees: HashMap<PersonnelNumber, Employee>,
    journal: Vec<LifecycleJournalEntry>,
}

#[derive(Default)]
pub struct InMemoryPersonnelRecords {
    inner: RwLock<Records>,
    is_offline: AtomicBool,
}

impl InMemoryPersonnelRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Employees known from configuration or a previous system, without journal history.
    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        let records = Records {
            employees: employees
                .into_iter()
                .map(|employee| (employee.personnel_number.clone(), employee))
                .collect(),
            journal: Vec::new(),
        };
        Self {
            inner: RwLock::new(records),
            is_offline: AtomicBool::new(false),
        }
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub async fn journal_len(&self) -> usize {
        self.inner.read().await.journal.len()
    }

    fn ensure_online(&self) -> Result<(), PersonnelStoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(PersonnelStoreError::Backend("Personnel records offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EmployeeDirectory for InMemoryPersonnelRecords {
    async fn get_employee(
        &self,
        personnel_number: &str,
    ) -> Result<Option<Employee>, PersonnelStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.employees.get(personnel_number).cloned())
    }
}

#[async_trait::async_trait]
impl LifecycleJournal for InMemoryPersonnelRecords {
    async fn entries_for(
        &self,
        personnel_number: &str,
    ) -> Result<Vec<LifecycleJournalEntry>, PersonnelStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .journal
            .iter()
            .filter(|entry| entry.personnel_number == personnel_number)
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl PersonnelRecords for InMemoryPersonnelRecords {
    async fn register_employee(
        &self,
        employee: Employee,
        hire: LifecycleJournalEntry,
    ) -> Result<(), PersonnelStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        if guard.employees.contains_key(&employee.personnel_number) {
            return Err(PersonnelStoreError::AlreadyExists(employee.personnel_number));
        }
        guard
            .employees
            .insert(employee.personnel_number.clone(), employee);
        guard.journal.push(hire);
        Ok(())
    }

    async fn commit_change(
        &self,
        employee: Employee,
        entry: Option<LifecycleJournalEntry>,
    ) -> Result<(), PersonnelStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let Some(current) = guard.employees.get_mut(&employee.personnel_number) else {
            return Err(PersonnelStoreError::NotFound(employee.personnel_number));
        };
        *current = employee;
        if let Some(entry) = entry {
            guard.journal.push(entry);
        }
        Ok(())
    }
}
