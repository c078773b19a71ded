use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::class::{self, Column as ClassColumn, Entity as ClassEntity, Status};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::response::ApiResponse;
use crate::routes::common::{MutationOutcome, parse_id};
use crate::state::AppState;

/// PATCH /classes/admin/{id}
///
/// Approves a submitted class. Reports rows touched; approving an unknown id
/// is zero rows, not an error.
pub async fn approve_class(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    let result = ClassEntity::update_many()
        .set(class::ActiveModel {
            status: Set(Status::Approved),
            ..Default::default()
        })
        .filter(ClassColumn::Id.eq(id))
        .exec(app_state.db())
        .await;

    match result {
        Ok(res) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                MutationOutcome {
                    rows_affected: res.rows_affected,
                },
                "Class approved",
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
