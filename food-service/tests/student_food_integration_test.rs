//! Integration tests for per-student meal assignments

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use sqlx::PgPool;

fn entry<'a>(list: &'a Value, student_id: &uuid::Uuid) -> &'a Value {
    list.as_array()
        .unwrap()
        .iter()
        .find(|s| s["studentId"] == student_id.to_string())
        .expect("student missing from listing")
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires database"]
async fn test_assignment_creates_then_replaces_meal(pool: PgPool) {
    let app = common::TestApp::with_pool(pool);
    let cook = app.user("cook");
    let student_id = uuid::Uuid::new_v4();

    let body = json!({
        "studentId": student_id,
        "food": "Spaghetti",
        "firstName": "Mila",
        "lastName": "Petrovic"
    });
    let (status, _) = app.post_auth("/studentsfood", &body.to_string(), &cook.token).await;
    assert_eq!(status, StatusCode::OK);

    // Names are optional on later assignments and keep their stored value
    let body = json!({ "studentId": student_id, "food": "  Risotto " });
    let (status, response) = app.post_auth("/studentsfood", &body.to_string(), &cook.token).await;
    assert_eq!(status, StatusCode::OK);
    let assigned: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(assigned["food"], "Risotto");
    assert_eq!(assigned["firstName"], "Mila");

    let (status, response) = app.get("/studentsfood").await;
    assert_eq!(status, StatusCode::OK);
    let list: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(entry(&list, &student_id)["food"], "Risotto");
    assert_eq!(entry(&list, &student_id)["lastName"], "Petrovic");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires database"]
async fn test_invalid_assignment_writes_nothing(pool: PgPool) {
    let app = common::TestApp::with_pool(pool);
    let cook = app.user("cook");

    let (status, _) = app
        .post_auth(
            "/studentsfood",
            &json!({ "studentId": "42", "food": "Pasta" }).to_string(),
            &cook.token,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post_auth(
            "/studentsfood",
            &json!({ "studentId": uuid::Uuid::new_v4(), "food": "" }).to_string(),
            &cook.token,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, response) = app.get("/studentsfood").await;
    assert_eq!(serde_json::from_str::<Value>(&response).unwrap(), json!([]));
}
