use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::generate_jwt;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

#[derive(Debug, Serialize, Default)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /jwt
///
/// Signs a token for the given identity payload.
///
/// ### Request Body
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// ### Responses
/// - `200 OK` with `{ "token": "..." }`
/// - `400 Bad Request` when the email is missing or malformed
pub async fn sign_token(
    State(app_state): State<AppState>,
    Json(req): Json<TokenRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<TokenResponse>::error(
                format_validation_errors(&e),
            )),
        );
    }

    let (token, _expiry) = generate_jwt(
        &req.email,
        app_state.encoding_key(),
        app_state.jwt_duration_minutes(),
    );

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            TokenResponse { token },
            "Token issued",
        )),
    )
}
