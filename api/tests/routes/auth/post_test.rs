use axum::{
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::helpers::app::make_test_app;

async fn get_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn sign_token_returns_usable_token() {
    let (app, _state) = make_test_app().await;

    let payload = json!({ "email": "student@test.com" });
    let req = Request::builder()
        .method("POST")
        .uri("/jwt")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], true);
    let token = json["data"]["token"].as_str().expect("token missing");
    assert!(!token.is_empty());

    // The issued token must pass the auth guard.
    let req = Request::builder()
        .uri("/classes/instructor/student@test.com")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn sign_token_rejects_malformed_email() {
    let (app, _state) = make_test_app().await;

    let payload = json!({ "email": "not-an-email" });
    let req = Request::builder()
        .method("POST")
        .uri("/jwt")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], false);
}
