use axum::{
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use db::models::class::Entity as ClassEntity;
use sea_orm::EntityTrait;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::helpers::app::{bearer_for, make_test_app};

async fn get_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn create_request(payload: &Value, bearer: Option<String>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/classes")
        .header(CONTENT_TYPE, "application/json");
    if let Some(bearer) = bearer {
        builder = builder.header("Authorization", bearer);
    }
    builder
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn create_class_enters_moderation_as_pending() {
    let (app, _state) = make_test_app().await;

    let payload = json!({
        "instructorEmail": "teach@test.com",
        "instructorName": "Teach",
        "className": "Conversational Spanish",
        "image": "https://img.test/spanish.jpg",
        "price": 49.99,
        "availableSeat": 20,
        "description": "Twice a week"
    });

    let response = app
        .oneshot(create_request(&payload, Some(bearer_for("teach@test.com"))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "Pending");
    assert_eq!(json["data"]["className"], "Conversational Spanish");
    assert_eq!(json["data"]["availableSeat"], 20);
    assert!(json["data"]["feedback"].is_null());
}

#[tokio::test]
async fn create_class_requires_token() {
    let (app, state) = make_test_app().await;

    let payload = json!({
        "instructorEmail": "teach@test.com",
        "className": "No Auth",
        "price": 10.0
    });

    let response = app.oneshot(create_request(&payload, None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let classes = ClassEntity::find().all(state.db()).await.unwrap();
    assert!(classes.is_empty());
}

#[tokio::test]
async fn create_class_rejects_missing_name() {
    let (app, _state) = make_test_app().await;

    let payload = json!({
        "instructorEmail": "teach@test.com",
        "className": "",
        "price": 10.0
    });

    let response = app
        .oneshot(create_request(&payload, Some(bearer_for("teach@test.com"))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
