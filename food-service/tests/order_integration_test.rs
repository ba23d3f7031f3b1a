//! Integration tests for orders and recommendations

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_order_snapshots_food() {
    let app = common::TestApp::new().await;
    let cook = app.user("cook");
    let student = app.user("student");
    let food_id = app.create_food(&cook, "Penne", "PASTA", "POSNO").await;

    let (status, body) = app
        .post_auth("/order", &json!({ "foodId": food_id }).to_string(), &student.token)
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let order = parse(&body);
    assert_eq!(order["food"]["foodName"], "Penne");
    assert_eq!(order["statusO"], "Neprihvacena");
    assert_eq!(order["statusO2"], "Neotkazana");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_order_for_unknown_food_is_not_found() {
    let app = common::TestApp::new().await;
    let student = app.user("student");

    let body = json!({ "foodId": uuid::Uuid::new_v4() });
    let (status, _) = app.post_auth("/order", &body.to_string(), &student.token).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_cancelled_order_leaves_active_listing() {
    let app = common::TestApp::new().await;
    let cook = app.user("cook");
    let student = app.user("student");
    let food_id = app.create_food(&cook, "Pizza capricciosa", "PICA", "MRSNO").await;
    let order_id = app.order(&student, &food_id).await;

    let (status, _) = app
        .put_auth(&format!("/order/{}/cancel", order_id), "", &student.token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, active) = app.get("/order").await;
    assert!(!active.contains(&order_id));

    let (_, mine) = app.get_auth("/my-orders", &student.token).await;
    assert!(mine.contains(&order_id));
    assert!(mine.contains("Otkazana"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_accepting_an_order() {
    let app = common::TestApp::new().await;
    let cook = app.user("cook");
    let student = app.user("student");
    let food_id = app.create_food(&cook, "Tuna salad", "SALATA", "POSNO").await;
    let order_id = app.order(&student, &food_id).await;

    let (status, _) = app
        .put_auth(
            &format!("/order/{}", order_id),
            &json!({ "status": "Prihvacena" }).to_string(),
            &cook.token,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, accepted) = app.get("/accepted-orders").await;
    assert!(accepted.contains(&order_id));

    let (status, _) = app
        .put_auth(
            &format!("/order/{}", order_id),
            &json!({ "status": "maybe" }).to_string(),
            &cook.token,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
