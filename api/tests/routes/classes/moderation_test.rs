use axum::{
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use db::models::class::{self, Status};
use db::models::user::{Model as UserModel, Role};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, Set};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::helpers::app::{bearer_for, make_test_app};

async fn get_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn seed_class(db: &DatabaseConnection, instructor: &str, name: &str) -> class::Model {
    class::ActiveModel {
        id: NotSet,
        instructor_email: Set(instructor.to_owned()),
        instructor_name: Set(None),
        class_name: Set(name.to_owned()),
        image: Set(None),
        price: Set(25.0),
        available_seats: Set(10),
        description: Set(None),
        status: Set(Status::Pending),
        feedback: Set(None),
    }
    .insert(db)
    .await
    .expect("Failed to seed class")
}

#[tokio::test]
async fn approved_class_shows_up_in_approved_listings() {
    let (app, state) = make_test_app().await;
    UserModel::create(state.db(), "admin@test.com", None, Role::Admin)
        .await
        .unwrap();
    let class = seed_class(state.db(), "teach@test.com", "Violin").await;

    let req = Request::builder()
        .method("PATCH")
        .uri(format!("/classes/admin/{}", class.id))
        .header("Authorization", bearer_for("admin@test.com"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_json_body(response).await;
    assert_eq!(json["data"]["rowsAffected"], 1);

    let req = Request::builder()
        .uri("/classes/approved/all")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    let approved = json["data"].as_array().unwrap();
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0]["className"], "Violin");
    assert_eq!(approved[0]["status"], "Approved");
}

#[tokio::test]
async fn denied_class_carries_feedback_verbatim() {
    let (app, state) = make_test_app().await;
    UserModel::create(state.db(), "admin@test.com", None, Role::Admin)
        .await
        .unwrap();
    let class = seed_class(state.db(), "teach@test.com", "Drums").await;

    let feedback = json!({ "feedback": "Too loud for the morning slot", "severity": 2 });
    let req = Request::builder()
        .method("PUT")
        .uri(format!("/classes/admin/{}", class.id))
        .header("Authorization", bearer_for("admin@test.com"))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&feedback).unwrap()))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The denial payload comes back untouched under the instructor's denied
    // listing.
    let req = Request::builder()
        .uri("/classes/denied/teach@test.com")
        .header("Authorization", bearer_for("teach@test.com"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    let denied = json["data"].as_array().unwrap();
    assert_eq!(denied.len(), 1);
    assert_eq!(denied[0]["status"], "Denied");
    assert_eq!(denied[0]["feedback"], feedback);
}

#[tokio::test]
async fn moderation_requires_admin_and_leaves_status_untouched() {
    let (app, state) = make_test_app().await;
    UserModel::create(state.db(), "student@test.com", None, Role::Student)
        .await
        .unwrap();
    let class = seed_class(state.db(), "teach@test.com", "Chess").await;

    let req = Request::builder()
        .method("PATCH")
        .uri(format!("/classes/admin/{}", class.id))
        .header("Authorization", bearer_for("student@test.com"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let unchanged = class::Entity::find_by_id(class.id)
        .one(state.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.status, Status::Pending);
}

#[tokio::test]
async fn instructor_listing_returns_all_statuses() {
    let (app, state) = make_test_app().await;
    UserModel::create(state.db(), "admin@test.com", None, Role::Admin)
        .await
        .unwrap();
    seed_class(state.db(), "teach@test.com", "One").await;
    let denied = seed_class(state.db(), "teach@test.com", "Two").await;
    seed_class(state.db(), "other@test.com", "Three").await;

    let req = Request::builder()
        .method("PUT")
        .uri(format!("/classes/admin/{}", denied.id))
        .header("Authorization", bearer_for("admin@test.com"))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&json!({"feedback": "no"})).unwrap()))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let req = Request::builder()
        .uri("/classes/instructor/teach@test.com")
        .header("Authorization", bearer_for("teach@test.com"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let json = get_json_body(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}
