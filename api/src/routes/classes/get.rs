use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::class::{Column as ClassColumn, Entity as ClassEntity, Status};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect};

use crate::response::ApiResponse;
use crate::routes::common::parse_id;
use crate::state::AppState;

/// GET /classes
pub async fn list_classes(State(app_state): State<AppState>) -> impl IntoResponse {
    match ClassEntity::find().all(app_state.db()).await {
        Ok(classes) => (
            StatusCode::OK,
            Json(ApiResponse::success(classes, "Classes retrieved successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /classes/oneClass/{id}
pub async fn get_class(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match ClassEntity::find_by_id(id).one(app_state.db()).await {
        Ok(Some(class)) => (
            StatusCode::OK,
            Json(ApiResponse::success(class, "Class retrieved successfully")),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Class not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /classes/approved/all
pub async fn list_approved(State(app_state): State<AppState>) -> impl IntoResponse {
    approved(app_state, None).await
}

/// GET /classes/approved/fixed
///
/// The landing page shows at most six.
pub async fn list_approved_fixed(State(app_state): State<AppState>) -> impl IntoResponse {
    approved(app_state, Some(6)).await
}

async fn approved(app_state: AppState, limit: Option<u64>) -> axum::response::Response {
    let mut query = ClassEntity::find().filter(ClassColumn::Status.eq(Status::Approved));
    if let Some(n) = limit {
        query = query.limit(n);
    }

    match query.all(app_state.db()).await {
        Ok(classes) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                classes,
                "Approved classes retrieved successfully",
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

/// GET /classes/instructor/{email}
///
/// Everything the instructor has submitted, whatever its status.
pub async fn list_by_instructor(
    State(app_state): State<AppState>,
    Path(email): Path<String>,
) -> impl IntoResponse {
    match ClassEntity::find()
        .filter(ClassColumn::InstructorEmail.eq(email.as_str()))
        .all(app_state.db())
        .await
    {
        Ok(classes) => (
            StatusCode::OK,
            Json(ApiResponse::success(classes, "Classes retrieved successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /classes/denied/{email}
///
/// Denied submissions for the instructor, feedback payload included.
pub async fn list_denied_by_instructor(
    State(app_state): State<AppState>,
    Path(email): Path<String>,
) -> impl IntoResponse {
    match ClassEntity::find()
        .filter(ClassColumn::InstructorEmail.eq(email.as_str()))
        .filter(ClassColumn::Status.eq(Status::Denied))
        .all(app_state.db())
        .await
    {
        Ok(classes) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                classes,
                "Denied classes retrieved successfully",
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
