use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::modules::personnel::use_cases::hire_employee::command::HireEmployee;
use crate::modules::personnel::use_cases::hire_employee::handler::{HireError, HireRejection};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<HireEmployee>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.hire_employee.handle(command).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(HireError::Rejected(rejection @ HireRejection::AlreadyRegistered(_))) => (
            StatusCode::CONFLICT,
            Json(json!({ "error": rejection.to_string() })),
        )
            .into_response(),
        Err(HireError::Rejected(rejection)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": rejection.to_string() })),
        )
            .into_response(),
        Err(HireError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
