use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::attendance::use_cases::import_absences::source::ImportSource;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ImportAbsencesBody {
    pub sources: Vec<ImportSource>,
}

/// Always 200 once the body parses: per-record and per-source failures are
/// part of the reported outcome.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ImportAbsencesBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let outcome = state.import_absences.import_sources(body.sources).await;
    Json(outcome).into_response()
}
