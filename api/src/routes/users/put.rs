use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::format_validation_errors;
use db::models::user::{self, Role};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};
use serde::Deserialize;
use validator::Validate;

use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub photo_url: Option<String>,
    pub role: Option<Role>,
}

/// PUT /users/{email}
///
/// Upsert by email: fields from the body are set on the existing row, or a
/// new row is created when the email is unknown. Email is the idempotent
/// key; repeated upserts leave exactly one row reflecting the latest values.
///
/// ### Request Body
/// ```json
/// { "name": "Aria", "photoUrl": "https://...", "role": "Instructor" }
/// ```
pub async fn upsert_user(
    State(app_state): State<AppState>,
    Path(email): Path<String>,
    Json(req): Json<UpsertUserRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format_validation_errors(&e))),
        )
            .into_response();
    }

    let db = app_state.db();

    match user::Model::find_by_email(db, &email).await {
        Ok(Some(existing)) => {
            let mut active: user::ActiveModel = existing.into();
            if let Some(name) = req.name {
                active.name = Set(Some(name));
            }
            if let Some(photo_url) = req.photo_url {
                active.photo_url = Set(Some(photo_url));
            }
            if let Some(role) = req.role {
                active.role = Set(role);
            }

            match active.update(db).await {
                Ok(updated) => (
                    StatusCode::OK,
                    Json(ApiResponse::success(updated, "User updated successfully")),
                )
                    .into_response(),
                Err(e) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
                )
                    .into_response(),
            }
        }
        Ok(None) => {
            let active = user::ActiveModel {
                id: NotSet,
                email: Set(email),
                name: Set(req.name),
                photo_url: Set(req.photo_url),
                role: Set(req.role.unwrap_or(Role::Student)),
            };

            match active.insert(db).await {
                Ok(created) => (
                    StatusCode::CREATED,
                    Json(ApiResponse::success(created, "User created successfully")),
                )
                    .into_response(),
                Err(e) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
                )
                    .into_response(),
            }
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
