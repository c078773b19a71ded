use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::selection::{Column as SelectionColumn, Entity as SelectionEntity, Model as SelectionModel};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::Deserialize;

use crate::response::ApiResponse;
use crate::routes::common::parse_id;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectionsQuery {
    pub email: Option<String>,
}

/// GET /classes/selected?email=
///
/// Selections for the given student. No email parameter is an empty list,
/// never an error.
pub async fn list_selections(
    State(app_state): State<AppState>,
    Query(query): Query<SelectionsQuery>,
) -> impl IntoResponse {
    let Some(email) = query.email else {
        return (
            StatusCode::OK,
            Json(ApiResponse::success(
                Vec::<SelectionModel>::new(),
                "Selections retrieved successfully",
            )),
        )
            .into_response();
    };

    match SelectionEntity::find()
        .filter(SelectionColumn::StudentEmail.eq(email.as_str()))
        .all(app_state.db())
        .await
    {
        Ok(selections) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                selections,
                "Selections retrieved successfully",
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

/// GET /classes/selected/pay/{id}
///
/// One selection, fetched for checkout.
pub async fn get_selection(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match SelectionEntity::find_by_id(id).one(app_state.db()).await {
        Ok(Some(selection)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                selection,
                "Selection retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Selection not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
