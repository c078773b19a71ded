use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::selection::Entity as SelectionEntity;
use sea_orm::EntityTrait;

use crate::response::ApiResponse;
use crate::routes::common::{MutationOutcome, parse_id};
use crate::state::AppState;

/// DELETE /classes/selected/{id}
///
/// Removes a selection. Reports rows touched; an unknown id is zero rows.
pub async fn remove_selection(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match SelectionEntity::delete_by_id(id).exec(app_state.db()).await {
        Ok(res) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                MutationOutcome {
                    rows_affected: res.rows_affected,
                },
                "Selection removed",
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
