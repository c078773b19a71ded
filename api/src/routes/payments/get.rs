use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::payment::{Column as PaymentColumn, Entity as PaymentEntity};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /payments/{email}
///
/// Payment history for a student, most recent first.
pub async fn payment_history(
    State(app_state): State<AppState>,
    Path(email): Path<String>,
) -> impl IntoResponse {
    match PaymentEntity::find()
        .filter(PaymentColumn::StudentEmail.eq(email.as_str()))
        .order_by_desc(PaymentColumn::CreatedAt)
        .all(app_state.db())
        .await
    {
        Ok(payments) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                payments,
                "Payments retrieved successfully",
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
