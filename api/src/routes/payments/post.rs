use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use common::format_validation_errors;
use db::models::{payment, selection::Entity as SelectionEntity};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::response::ApiResponse;
use crate::services::payment::to_minor_units;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct PaymentIntentRequest {
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
}

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

/// POST /create-payment-intent
///
/// Asks the payment provider for an intent covering the given price and
/// hands the client secret back for checkout. Amounts are integer minor
/// units in a fixed currency.
pub async fn create_payment_intent(
    State(app_state): State<AppState>,
    Json(req): Json<PaymentIntentRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format_validation_errors(&e))),
        )
            .into_response();
    }

    let amount = to_minor_units(req.price);

    match app_state
        .payments()
        .create_payment_intent(amount, "usd")
        .await
    {
        Ok(client_secret) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                PaymentIntentResponse { client_secret },
                "Payment intent created",
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Payment provider error: {e}"
            ))),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Transaction id must not be empty"))]
    pub transaction_id: String,
    pub amount: f64,
    pub class_id: Option<i64>,
    pub class_name: Option<String>,
    pub selection_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentResponse {
    pub payment: payment::Model,
    pub selection_deleted: bool,
}

/// POST /payments
///
/// Records a completed payment, then deletes the paid-for selection. The two
/// writes are not atomic: if the delete fails after the insert succeeded the
/// response still reports the payment, with `selectionDeleted: false` so the
/// stale selection is visible rather than masked.
pub async fn record_payment(
    State(app_state): State<AppState>,
    Json(req): Json<RecordPaymentRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format_validation_errors(&e))),
        )
            .into_response();
    }

    let db = app_state.db();

    let active = payment::ActiveModel {
        id: NotSet,
        student_email: Set(req.email),
        transaction_id: Set(req.transaction_id),
        amount: Set(req.amount),
        class_id: Set(req.class_id),
        class_name: Set(req.class_name),
        created_at: Set(Utc::now()),
    };

    let payment = match active.insert(db).await {
        Ok(created) => created,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
            )
                .into_response();
        }
    };

    let selection_deleted = match SelectionEntity::delete_by_id(req.selection_id).exec(db).await {
        Ok(res) => res.rows_affected > 0,
        Err(e) => {
            tracing::warn!(
                error = %e,
                selection_id = req.selection_id,
                "Payment recorded but selection delete failed; selection is stale"
            );
            false
        }
    };

    let message = if selection_deleted {
        "Payment recorded"
    } else {
        "Payment recorded; selection was not removed"
    };

    (
        StatusCode::CREATED,
        Json(ApiResponse::success(
            RecordPaymentResponse {
                payment,
                selection_deleted,
            },
            message,
        )),
    )
        .into_response()
}
