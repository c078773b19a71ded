use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::class::{self, Column as ClassColumn, Entity as ClassEntity, Status};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::Deserialize;

use crate::response::ApiResponse;
use crate::routes::common::{MutationOutcome, parse_id};
use crate::state::AppState;

/// PUT /classes/admin/{id}
///
/// Denies a class, storing the request body verbatim as feedback. Ids are
/// server-generated, so this is a plain update; an unknown id is zero rows.
pub async fn deny_class(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(feedback): Json<serde_json::Value>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    let result = ClassEntity::update_many()
        .set(class::ActiveModel {
            status: Set(Status::Denied),
            feedback: Set(Some(feedback)),
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
                "Class denied",
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

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassRequest {
    pub class_name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    #[serde(rename = "availableSeat")]
    pub available_seats: Option<i32>,
    pub description: Option<String>,
}

/// PUT /classes/update/{id}
///
/// Field update from the instructor. Only provided fields are written.
pub async fn update_class(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateClassRequest>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    let db = app_state.db();

    match ClassEntity::find_by_id(id).one(db).await {
        Ok(Some(existing)) => {
            let mut active: class::ActiveModel = existing.into();
            if let Some(class_name) = req.class_name {
                active.class_name = Set(class_name);
            }
            if let Some(image) = req.image {
                active.image = Set(Some(image));
            }
            if let Some(price) = req.price {
                active.price = Set(price);
            }
            if let Some(available_seats) = req.available_seats {
                active.available_seats = Set(available_seats);
            }
            if let Some(description) = req.description {
                active.description = Set(Some(description));
            }

            match active.update(db).await {
                Ok(updated) => (
                    StatusCode::OK,
                    Json(ApiResponse::success(updated, "Class updated successfully")),
                )
                    .into_response(),
                Err(e) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
                )
                    .into_response(),
            }
        }
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
