use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::modules::attendance::core::absence::AbsenceCandidate;
use crate::modules::attendance::core::rejection::RejectionReason;
use crate::modules::attendance::use_cases::record_absence::command::{AbsenceTarget, RecordAbsence};
use crate::modules::attendance::use_cases::record_absence::handler::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle_create(
    State(state): State<AppState>,
    body: Result<Json<AbsenceCandidate>, JsonRejection>,
) -> impl IntoResponse {
    let Json(candidate) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let command = RecordAbsence {
        target: AbsenceTarget::New,
        candidate,
    };
    match state.record_absence.handle(command).await {
        Ok(absence) => (StatusCode::CREATED, Json(absence)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<AbsenceCandidate>, JsonRejection>,
) -> impl IntoResponse {
    let Json(candidate) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let command = RecordAbsence {
        target: AbsenceTarget::Existing(id),
        candidate,
    };
    match state.record_absence.handle(command).await {
        Ok(absence) => (StatusCode::OK, Json(absence)).into_response(),
        Err(e) => error_response(e),
    }
}

/// duplicate -> 409, unknown absence -> 404, other rejections -> 422, store failures -> 500.
pub fn error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::Rejected(reason) => {
            let status = match reason {
                RejectionReason::Duplicate => StatusCode::CONFLICT,
                _ => StatusCode::UNPROCESSABLE_ENTITY,
            };
            let body = json!({ "error": reason.to_string(), "rejection": reason });
            (status, Json(body)).into_response()
        }
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
        ApplicationError::AbsenceStore(_) | ApplicationError::PersonnelStore(_) => {
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
