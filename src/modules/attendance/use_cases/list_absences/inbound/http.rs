use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle_get(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.absences.get_by_id(&id).await {
        Ok(Some(absence)) => Json(absence).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn handle_list_for_employee(
    State(state): State<AppState>,
    Path(personnel_number): Path<String>,
) -> impl IntoResponse {
    match state.absences.list_for_employee(&personnel_number).await {
        Ok(absences) => Json(absences).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
