use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::user::{self, Column as UserColumn, Entity as UserEntity, Role};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect};
use serde::Serialize;

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /users
///
/// All users. Admin-only; the guard binding lives in the route table.
pub async fn list_users(State(app_state): State<AppState>) -> impl IntoResponse {
    match UserEntity::find().all(app_state.db()).await {
        Ok(users) => (
            StatusCode::OK,
            Json(ApiResponse::success(users, "Users retrieved successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /users/{email}
pub async fn get_user(
    State(app_state): State<AppState>,
    Path(email): Path<String>,
) -> impl IntoResponse {
    match user::Model::find_by_email(app_state.db(), &email).await {
        Ok(Some(found)) => (
            StatusCode::OK,
            Json(ApiResponse::success(found, "User retrieved successfully")),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("User not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

#[derive(Debug, Serialize, Default)]
pub struct CheckAdminResponse {
    pub admin: bool,
}

/// GET /users/admin/{email}
///
/// Whether the caller is an admin. A caller asking about a different email
/// than their token's is answered `false` without touching the database.
pub async fn check_admin(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(email): Path<String>,
) -> impl IntoResponse {
    if user.email() != email {
        return (
            StatusCode::OK,
            Json(ApiResponse::success(
                CheckAdminResponse { admin: false },
                "Email does not match caller",
            )),
        )
            .into_response();
    }

    match user::Model::find_by_email(app_state.db(), &email).await {
        Ok(found) => {
            let admin = found.is_some_and(|u| u.role == Role::Admin);
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    CheckAdminResponse { admin },
                    "Role checked",
                )),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

#[derive(Debug, Serialize, Default)]
pub struct CheckInstructorResponse {
    pub instructor: bool,
}

/// GET /users/instructor/{email}
pub async fn check_instructor(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(email): Path<String>,
) -> impl IntoResponse {
    if user.email() != email {
        return (
            StatusCode::OK,
            Json(ApiResponse::success(
                CheckInstructorResponse { instructor: false },
                "Email does not match caller",
            )),
        )
            .into_response();
    }

    match user::Model::find_by_email(app_state.db(), &email).await {
        Ok(found) => {
            let instructor = found.is_some_and(|u| u.role == Role::Instructor);
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    CheckInstructorResponse { instructor },
                    "Role checked",
                )),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /users/instructors/all
pub async fn list_instructors(State(app_state): State<AppState>) -> impl IntoResponse {
    instructors(app_state, None).await
}

/// GET /users/instructors/fixed
///
/// The landing page shows at most six.
pub async fn list_instructors_fixed(State(app_state): State<AppState>) -> impl IntoResponse {
    instructors(app_state, Some(6)).await
}

async fn instructors(app_state: AppState, limit: Option<u64>) -> axum::response::Response {
    let mut query = UserEntity::find().filter(UserColumn::Role.eq(Role::Instructor));
    if let Some(n) = limit {
        query = query.limit(n);
    }

    match query.all(app_state.db()).await {
        Ok(users) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                users,
                "Instructors retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
