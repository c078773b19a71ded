use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use common::format_validation_errors;
use db::models::selection::{self, Place};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};
use serde::Deserialize;
use validator::Validate;

use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSelectionRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub class_id: i64,
    pub class_name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
}

/// POST /classes/selected
///
/// Student picks a class. The selection sits in `pending` until paid for or
/// removed.
pub async fn create_selection(
    State(app_state): State<AppState>,
    Json(req): Json<CreateSelectionRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format_validation_errors(&e))),
        )
            .into_response();
    }

    let active = selection::ActiveModel {
        id: NotSet,
        student_email: Set(req.email),
        class_id: Set(req.class_id),
        class_name: Set(req.class_name),
        image: Set(req.image),
        price: Set(req.price),
        place: Set(Place::Pending),
    };

    match active.insert(app_state.db()).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(created, "Class selected successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
