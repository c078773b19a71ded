use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use db::models::user::{Model as UserModel, Role};
use serde_json::Value;
use tower::ServiceExt;

use crate::helpers::app::{bearer_for, make_test_app};

async fn get_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn patch_request(uri: &str, bearer: Option<String>) -> Request<Body> {
    let mut builder = Request::builder().method("PATCH").uri(uri);
    if let Some(bearer) = bearer {
        builder = builder.header("Authorization", bearer);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn make_admin_updates_role() {
    let (app, state) = make_test_app().await;
    UserModel::create(state.db(), "admin@test.com", None, Role::Admin)
        .await
        .unwrap();
    let target = UserModel::create(state.db(), "target@test.com", None, Role::Student)
        .await
        .unwrap();

    let response = app
        .oneshot(patch_request(
            &format!("/users/admin/{}", target.id),
            Some(bearer_for("admin@test.com")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["data"]["rowsAffected"], 1);

    let updated = UserModel::find_by_email(state.db(), "target@test.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.role, Role::Admin);
}

#[tokio::test]
async fn make_instructor_requires_admin_caller() {
    let (app, state) = make_test_app().await;
    UserModel::create(state.db(), "student@test.com", None, Role::Student)
        .await
        .unwrap();
    let target = UserModel::create(state.db(), "target@test.com", None, Role::Student)
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(patch_request(&format!("/users/instructor/{}", target.id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(patch_request(
            &format!("/users/instructor/{}", target.id),
            Some(bearer_for("student@test.com")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // No mutation happened.
    let unchanged = UserModel::find_by_email(state.db(), "target@test.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.role, Role::Student);
}

#[tokio::test]
async fn role_update_reports_zero_rows_for_unknown_id() {
    let (app, state) = make_test_app().await;
    UserModel::create(state.db(), "admin@test.com", None, Role::Admin)
        .await
        .unwrap();

    let response = app
        .oneshot(patch_request(
            "/users/admin/999999",
            Some(bearer_for("admin@test.com")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["data"]["rowsAffected"], 0);
}

#[tokio::test]
async fn role_update_rejects_malformed_id() {
    let (app, state) = make_test_app().await;
    UserModel::create(state.db(), "admin@test.com", None, Role::Admin)
        .await
        .unwrap();

    let response = app
        .oneshot(patch_request(
            "/users/admin/not-a-number",
            Some(bearer_for("admin@test.com")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], false);
}
