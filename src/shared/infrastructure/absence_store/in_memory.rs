// In memory implementation of the AbsenceStore port.
//
// Purpose
// - Support use case tests and local development without a database.
//
// Responsibilities
// - Keep absences keyed by id.
// - Check (employee, date) uniqueness under the write lock so concurrent
//   registrations cannot both succeed.

use crate::modules::attendance::core::absence::{Absence, NormalizedAbsence};
use crate::shared::core::primitives::{AbsenceId, new_id};
use crate::shared::infrastructure::absence_store::{AbsenceStore, AbsenceStoreError};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryAbsenceStore {
    absences: RwLock<HashMap<AbsenceId, Absence>>,
    is_offline: AtomicBool,
    delay_insert_ms: AtomicU64,
}

impl InMemoryAbsenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    /// Delays every insert before it takes the write lock.
    pub fn set_delay_insert_ms(&self, ms: u64) {
        self.delay_insert_ms.store(ms, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.absences.read().await.len()
    }

    fn ensure_online(&self) -> Result<(), AbsenceStoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(AbsenceStoreError::Backend("Absence store offline".into()));
        }
        Ok(())
    }
}

fn conflicting<'a>(
    absences: &'a HashMap<AbsenceId, Absence>,
    personnel_number: &str,
    date: NaiveDate,
) -> Option<&'a Absence> {
    absences
        .values()
        .find(|absence| absence.is_same_slot(personnel_number, date))
}

#[async_trait::async_trait]
impl AbsenceStore for InMemoryAbsenceStore {
    async fn exists(
        &self,
        personnel_number: &str,
        date: NaiveDate,
    ) -> Result<bool, AbsenceStoreError> {
        Ok(self.find_for(personnel_number, date).await?.is_some())
    }

    async fn find_for(
        &self,
        personnel_number: &str,
        date: NaiveDate,
    ) -> Result<Option<Absence>, AbsenceStoreError> {
        self.ensure_online()?;
        let guard = self.absences.read().await;
        Ok(conflicting(&guard, personnel_number, date).cloned())
    }

    async fn insert(&self, absence: NormalizedAbsence) -> Result<AbsenceId, AbsenceStoreError> {
        self.ensure_online()?;
        let delay = self.delay_insert_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let mut guard = self.absences.write().await;
        if conflicting(&guard, &absence.personnel_number, absence.date).is_some() {
            return Err(AbsenceStoreError::Conflict {
                personnel_number: absence.personnel_number,
                date: absence.date,
            });
        }
        let id = new_id();
        guard.insert(id.clone(), Absence::from_normalized(id.clone(), absence));
        Ok(id)
    }

    async fn update(&self, id: &str, absence: NormalizedAbsence) -> Result<(), AbsenceStoreError> {
        self.ensure_online()?;
        let mut guard = self.absences.write().await;
        if !guard.contains_key(id) {
            return Err(AbsenceStoreError::NotFound(id.to_string()));
        }
        if let Some(other) = conflicting(&guard, &absence.personnel_number, absence.date)
            && other.id != id
        {
            return Err(AbsenceStoreError::Conflict {
                personnel_number: absence.personnel_number,
                date: absence.date,
            });
        }
        guard.insert(id.to_string(), Absence::from_normalized(id.to_string(), absence));
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AbsenceStoreError> {
        self.ensure_online()?;
        self.absences
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AbsenceStoreError::NotFound(id.to_string()))
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Absence>, AbsenceStoreError> {
        self.ensure_online()?;
        Ok(self.absences.read().await.get(id).cloned())
    }

    async fn list_for_employee(
        &self,
        personnel_number: &str,
    ) -> Result<Vec<Absence>, AbsenceStoreError> {
        self.ensure_online()?;
        let guard = self.absences.read().await;
        let mut absences: Vec<Absence> = guard
            .values()
            .filter(|absence| absence.personnel_number == personnel_number)
            .cloned()
            .collect();
        absences.sort_by_key(|absence| absence.date);
        Ok(absences)
    }
}
