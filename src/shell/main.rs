use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use personnel_records::modules::attendance::adapters::outbound::schedule_table::ScheduleTable;
use personnel_records::shared::infrastructure::absence_store::in_memory::InMemoryAbsenceStore;
use personnel_records::shared::infrastructure::personnel_records::in_memory::InMemoryPersonnelRecords;
use personnel_records::shell::config::{AppConfig, SeedData};
use personnel_records::shell::http::router;
use personnel_records::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let seed = match &config.seed_file {
        Some(path) => SeedData::load(path).context("failed to load seed data")?,
        None => SeedData::default(),
    };
    let schedule: ScheduleTable = seed.schedule_table().context("invalid schedule")?;
    tracing::info!(
        schedule_entries = schedule.len(),
        employees = seed.employees.len(),
        "seed data loaded"
    );

    // In-memory deps for now
    let absences = Arc::new(InMemoryAbsenceStore::new());
    let personnel = Arc::new(InMemoryPersonnelRecords::with_employees(seed.employees));
    let state = AppState::new(config.engine, absences, personnel, Arc::new(schedule));

    let app = router(state);
    tracing::info!("HTTP endpoint: http://{}", config.http_addr);
    let listener = tokio::net::TcpListener::bind(config.http_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.http_addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
