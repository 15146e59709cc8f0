use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::modules::attendance::use_cases::import_absences::inbound::http as import_http;
use crate::modules::attendance::use_cases::list_absences::inbound::http as list_absences_http;
use crate::modules::attendance::use_cases::record_absence::inbound::http as record_http;
use crate::modules::attendance::use_cases::remove_absence::inbound::http as remove_http;
use crate::modules::personnel::use_cases::change_employee::inbound::http as change_http;
use crate::modules::personnel::use_cases::hire_employee::inbound::http as hire_http;
use crate::modules::personnel::use_cases::list_journal::inbound::http as journal_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/absences", post(record_http::handle_create))
        .route("/absences/import", post(import_http::handle))
        .route(
            "/absences/{id}",
            get(list_absences_http::handle_get)
                .put(record_http::handle_update)
                .delete(remove_http::handle),
        )
        .route("/employees", post(hire_http::handle))
        .route("/employees/{pn}", put(change_http::handle_apply))
        .route(
            "/employees/{pn}/absences",
            get(list_absences_http::handle_list_for_employee),
        )
        .route(
            "/employees/{pn}/changes/preview",
            post(change_http::handle_preview),
        )
        .route("/employees/{pn}/journal", get(journal_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
