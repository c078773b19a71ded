use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::selection::{self, Column as SelectionColumn, Entity as SelectionEntity, Place};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::response::ApiResponse;
use crate::routes::common::MutationOutcome;
use crate::state::AppState;

/// PATCH /classes/selected/{email}
///
/// Marks the student's selections as `selected`. Reports rows touched.
pub async fn mark_selected(
    State(app_state): State<AppState>,
    Path(email): Path<String>,
) -> impl IntoResponse {
    let result = SelectionEntity::update_many()
        .set(selection::ActiveModel {
            place: Set(Place::Selected),
            ..Default::default()
        })
        .filter(SelectionColumn::StudentEmail.eq(email.as_str()))
        .exec(app_state.db())
        .await;

    match result {
        Ok(res) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                MutationOutcome {
                    rows_affected: res.rows_affected,
                },
                "Selections marked as selected",
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
