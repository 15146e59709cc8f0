use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::modules::personnel::core::employee::Employee;
use crate::modules::personnel::use_cases::change_employee::command::{ChangeEmployee, Confirmation};
use crate::modules::personnel::use_cases::change_employee::decision::{ChangeError, ChangeRejection};
use crate::modules::personnel::use_cases::change_employee::handler::ChangeOutcome;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ApplyChangeBody {
    pub employee: Employee,
    /// Missing means the caller has not confirmed anything yet.
    #[serde(default)]
    pub confirmation: Option<Confirmation>,
}

pub async fn handle_preview(
    State(state): State<AppState>,
    Path(personnel_number): Path<String>,
    body: Result<Json<Employee>, JsonRejection>,
) -> impl IntoResponse {
    let Json(proposed) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let command = ChangeEmployee {
        personnel_number,
        proposed,
    };
    match state.change_employee.propose(&command).await {
        Ok(decision) => Json(decision).into_response(),
        Err(e) => error_response(e),
    }
}

/// A classified transition without a confirmation is answered with 409 and the
/// proposal to confirm; nothing is written in that case.
pub async fn handle_apply(
    State(state): State<AppState>,
    Path(personnel_number): Path<String>,
    body: Result<Json<ApplyChangeBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let command = ChangeEmployee {
        personnel_number,
        proposed: body.employee,
    };
    let confirmation = body.confirmation.unwrap_or(Confirmation::Declined);
    match state.change_employee.apply(command, &confirmation).await {
        Ok(outcome @ ChangeOutcome::Declined { .. }) => {
            (StatusCode::CONFLICT, Json(outcome)).into_response()
        }
        Ok(outcome) => Json(outcome).into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(error: ChangeError) -> Response {
    match error {
        ChangeError::Rejected(ChangeRejection::UnknownEmployee(_)) => {
            StatusCode::NOT_FOUND.into_response()
        }
        ChangeError::Rejected(rejection) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": rejection.to_string() })),
        )
            .into_response(),
        ChangeError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
