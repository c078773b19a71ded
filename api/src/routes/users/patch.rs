use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::user::{self, Column as UserColumn, Entity as UserEntity, Role};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::response::ApiResponse;
use crate::routes::common::{MutationOutcome, parse_id};
use crate::state::AppState;

/// PATCH /users/admin/{id}
///
/// Unconditionally sets role = admin on the given id. No existence check;
/// the outcome reports how many rows were touched.
pub async fn make_admin(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    set_role(app_state, &id, Role::Admin).await
}

/// PATCH /users/instructor/{id}
pub async fn make_instructor(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    set_role(app_state, &id, Role::Instructor).await
}

async fn set_role(app_state: AppState, raw_id: &str, role: Role) -> axum::response::Response {
    let id = match parse_id(raw_id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    let result = UserEntity::update_many()
        .set(user::ActiveModel {
            role: Set(role),
            ..Default::default()
        })
        .filter(UserColumn::Id.eq(id))
        .exec(app_state.db())
        .await;

    match result {
        Ok(res) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                MutationOutcome {
                    rows_affected: res.rows_affected,
                },
                "Role updated",
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
