use crate::modules::attendance::use_cases::record_absence::handler::ApplicationError;
use crate::shared::infrastructure::absence_store::AbsenceStore;
use std::sync::Arc;
use tracing::{error, info};

pub struct RemoveAbsenceHandler<TStore>
where
    TStore: AbsenceStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RemoveAbsenceHandler<TStore>
where
    TStore: AbsenceStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, absence_id: &str) -> Result<(), ApplicationError> {
        match self.store.delete(absence_id).await {
            Ok(()) => {
                info!(%absence_id, "absence removed");
                Ok(())
            }
            Err(e) => {
                let e = ApplicationError::from(e);
                if !matches!(e, ApplicationError::NotFound(_)) {
                    error!(error = %e, %absence_id, "failed to remove absence");
                }
                Err(e)
            }
        }
    }
}
