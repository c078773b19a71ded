use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use common::format_validation_errors;
use db::models::class::{self, Status};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};
use serde::Deserialize;
use validator::Validate;

use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassRequest {
    #[validate(email(message = "Invalid instructor email"))]
    pub instructor_email: String,
    pub instructor_name: Option<String>,
    #[validate(length(min = 1, message = "Class name must not be empty"))]
    pub class_name: String,
    pub image: Option<String>,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    #[serde(rename = "availableSeat", default)]
    pub available_seats: i32,
    pub description: Option<String>,
}

/// POST /classes
///
/// Instructor submits a class. It enters moderation as `Pending`; only admin
/// action moves it to `Approved` or `Denied`.
pub async fn create_class(
    State(app_state): State<AppState>,
    Json(req): Json<CreateClassRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format_validation_errors(&e))),
        )
            .into_response();
    }

    let active = class::ActiveModel {
        id: NotSet,
        instructor_email: Set(req.instructor_email),
        instructor_name: Set(req.instructor_name),
        class_name: Set(req.class_name),
        image: Set(req.image),
        price: Set(req.price),
        available_seats: Set(req.available_seats),
        description: Set(req.description),
        status: Set(Status::Pending),
        feedback: Set(None),
    };

    match active.insert(app_state.db()).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(created, "Class submitted successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
