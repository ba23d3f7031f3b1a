//! Integration tests for ratings, comments and summaries

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_rating_requires_an_order() {
    let app = common::TestApp::new().await;
    let cook = app.user("cook");
    let student = app.user("student");
    let food_id = app.create_food(&cook, "Pasta carbonara", "PASTA", "MRSNO").await;

    let (status, _) = app
        .post_auth(
            &format!("/food/{}/reviews/rating", food_id),
            &json!({ "rating": 4 }).to_string(),
            &student.token,
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_rating_twice_replaces_the_first() {
    let app = common::TestApp::new().await;
    let cook = app.user("cook");
    let student = app.user("student");
    let food_id = app.create_food(&cook, "Pizza margherita", "PICA", "POSNO").await;
    app.order(&student, &food_id).await;

    let uri = format!("/food/{}/reviews/rating", food_id);
    app.post_auth(&uri, &json!({ "rating": 2 }).to_string(), &student.token)
        .await;
    let (status, body) = app
        .post_auth(&uri, &json!({ "rating": 5 }).to_string(), &student.token)
        .await;

    assert_eq!(status, StatusCode::OK);
    let summary = parse(&body);
    assert_eq!(summary["ratingCount"], 1);
    assert_eq!(summary["avgRating"], 5.0);
    assert_eq!(summary["myRating"], 5);
    assert_eq!(summary["canReview"], true);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_average_over_several_students() {
    let app = common::TestApp::new().await;
    let cook = app.user("cook");
    let food_id = app.create_food(&cook, "Greek salad", "SALATA", "POSNO").await;

    for rating in [3, 4, 5] {
        let student = app.user("student");
        app.order(&student, &food_id).await;
        let (status, _) = app
            .post_auth(
                &format!("/food/{}/reviews/rating", food_id),
                &json!({ "rating": rating }).to_string(),
                &student.token,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = app
        .get(&format!("/food/{}/reviews/summary", food_id))
        .await;
    assert_eq!(status, StatusCode::OK);

    let summary = parse(&body);
    assert_eq!(summary["ratingCount"], 3);
    assert_eq!(summary["avgRating"], 4.0);
    assert_eq!(summary["canReview"], false);
    assert_eq!(summary["myRating"], 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_comments_are_trimmed_and_newest_first() {
    let app = common::TestApp::new().await;
    let cook = app.user("cook");
    let student = app.user("student");
    let food_id = app.create_food(&cook, "Lasagne", "PASTA", "MRSNO").await;
    app.order(&student, &food_id).await;

    let uri = format!("/food/{}/reviews/comments", food_id);
    for text in ["  first  ", "second"] {
        let (status, _) = app
            .post_auth(&uri, &json!({ "text": text }).to_string(), &student.token)
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app.get(&format!("{}?limit=1", uri)).await;
    assert_eq!(status, StatusCode::OK);

    let comments = parse(&body);
    let comments = comments.as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["text"], "second");
    assert_eq!(
        comments[0]["author"],
        format!("{} {}", student.first_name, student.last_name)
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_batch_summaries_cover_foods_without_reviews() {
    let app = common::TestApp::new().await;
    let cook = app.user("cook");
    let student = app.user("student");
    let rated = app.create_food(&cook, "Pizza quattro", "PICA", "MRSNO").await;
    let unrated = app.create_food(&cook, "Bean salad", "SALATA", "POSNO").await;
    app.order(&student, &rated).await;
    app.post_auth(
        &format!("/food/{}/reviews/rating", rated),
        &json!({ "rating": 3 }).to_string(),
        &student.token,
    )
    .await;

    let body = json!({ "foodIds": [rated, unrated, "garbage"] });
    let (status, response) = app
        .post("/foods/reviews/summaries", &body.to_string())
        .await;
    assert_eq!(status, StatusCode::OK);

    let map = parse(&response);
    assert_eq!(map.as_object().unwrap().len(), 2);
    assert_eq!(map[&rated]["ratingCount"], 1);
    assert_eq!(map[&unrated]["ratingCount"], 0);
    assert_eq!(map[&unrated]["avgRating"], 0.0);
}
