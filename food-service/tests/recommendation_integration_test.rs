//! Integration tests for recommendations
//!
//! Results are capped and ordered over the whole foods table, so each test
//! runs in its own database via `#[sqlx::test]`.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use sqlx::PgPool;

async fn recommended(app: &common::TestApp, token: &str) -> Vec<Value> {
    let (status, body) = app.get_auth("/recommendations", token).await;
    assert_eq!(status, StatusCode::OK);

    let parsed: Value = serde_json::from_str(&body).unwrap();
    parsed.as_array().unwrap().clone()
}

fn ids(foods: &[Value]) -> Vec<String> {
    foods
        .iter()
        .map(|f| f["id"].as_str().unwrap().to_string())
        .collect()
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires database"]
async fn test_recommendations_follow_ordered_categories(pool: PgPool) {
    let app = common::TestApp::with_pool(pool);
    let cook = app.user("cook");
    let student = app.user("student");

    let ordered = app.create_food(&cook, "Spaghetti", "PASTA", "POSNO").await;
    let similar = app.create_food(&cook, "Tagliatelle", "PASTA", "POSNO").await;
    let other = app.create_food(&cook, "Pizza diavola", "PICA", "MRSNO").await;
    app.order(&student, &ordered).await;

    let ids = ids(&recommended(&app, &student.token).await);
    assert_eq!(ids, vec![similar]);
    assert!(!ids.contains(&ordered));
    assert!(!ids.contains(&other));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires database"]
async fn test_recommendations_are_capped_at_five(pool: PgPool) {
    let app = common::TestApp::with_pool(pool);
    let cook = app.user("cook");
    let student = app.user("student");

    let ordered = app.create_food(&cook, "Lasagne", "PASTA", "POSNO").await;
    for i in 0..7 {
        app.create_food(&cook, &format!("Penne {}", i), "PASTA", "POSNO").await;
    }
    app.create_food(&cook, "Caesar", "SALATA", "MRSNO").await;
    app.order(&student, &ordered).await;

    let foods = recommended(&app, &student.token).await;
    assert_eq!(foods.len(), 5);
    assert!(!ids(&foods).contains(&ordered));
    for food in &foods {
        assert_eq!(food["type1"], "PASTA");
        assert_eq!(food["type2"], "POSNO");
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires database"]
async fn test_cancelled_history_recommends_nothing(pool: PgPool) {
    let app = common::TestApp::with_pool(pool);
    let cook = app.user("cook");
    let student = app.user("student");

    let ordered = app.create_food(&cook, "Margherita", "PICA", "POSNO").await;
    app.create_food(&cook, "Marinara", "PICA", "POSNO").await;
    let order_id = app.order(&student, &ordered).await;
    let (status, _) = app
        .put_auth(&format!("/order/{}/cancel", order_id), "", &student.token)
        .await;
    assert_eq!(status, StatusCode::OK);

    assert!(recommended(&app, &student.token).await.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires database"]
async fn test_no_orders_means_no_recommendations(pool: PgPool) {
    let app = common::TestApp::with_pool(pool);
    let cook = app.user("cook");
    let student = app.user("student");
    app.create_food(&cook, "Greek salad", "SALATA", "POSNO").await;

    assert_eq!(Value::Array(recommended(&app, &student.token).await), json!([]));
}
