use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::app::Harness;
use crate::tests::fixtures::imports::MONDAY_CSV;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn records_imports_and_removes_absences_for_a_monday() {
    let harness = Harness::new();
    let app = router(harness.state);

    let created = send(
        &app,
        "POST",
        "/absences",
        Some(json!({
            "personnel_number": "E-2002",
            "date": "2024-03-04",
            "full_day": false,
            "reason": "Dentist",
            "manual_start": "10:00",
            "manual_end": "12:00"
        })),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let partial = json_body(created).await;
    assert_eq!(partial["start"], "10:00");
    assert_eq!(partial["schedule_entry_id"], Value::Null);

    let saturday = send(
        &app,
        "POST",
        "/absences",
        Some(json!({
            "personnel_number": "E-1001",
            "date": "2024-03-09",
            "full_day": true,
            "reason": "Sick leave"
        })),
    )
    .await;
    assert_eq!(saturday.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(saturday).await["rejection"]["code"], "non_working_day");

    let imported = send(
        &app,
        "POST",
        "/absences/import",
        Some(json!({ "sources": [{ "name": "march.csv", "content": MONDAY_CSV }] })),
    )
    .await;
    assert_eq!(imported.status(), StatusCode::OK);
    let outcome = json_body(imported).await;
    assert_eq!(outcome["added"], 1);
    assert_eq!(outcome["skipped"], 2);
    assert_eq!(outcome["file_errors"], 0);

    let listed = send(&app, "GET", "/employees/E-1001/absences", None).await;
    let absences = json_body(listed).await;
    assert_eq!(absences.as_array().unwrap().len(), 1);
    assert_eq!(absences[0]["full_day"], true);
    assert_eq!(absences[0]["start"], "09:00");
    assert_eq!(absences[0]["end"], "18:00");
    assert_eq!(absences[0]["schedule_entry_id"], "P-DEV:1");

    let id = absences[0]["id"].as_str().unwrap().to_string();
    let removed = send(&app, "DELETE", &format!("/absences/{id}"), None).await;
    assert_eq!(removed.status(), StatusCode::NO_CONTENT);
    let gone = send(&app, "GET", &format!("/absences/{id}"), None).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    assert_eq!(harness.absences.len().await, 1);
}
