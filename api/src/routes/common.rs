use axum::{Json, http::StatusCode};
use serde::Serialize;

use crate::response::ApiResponse;

/// Outcome of a raw update/delete: how many rows the statement touched.
/// Zero matches is not distinguished from success.
#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MutationOutcome {
    pub rows_affected: u64,
}

/// Parses an opaque record handle from a path segment. A malformed handle is
/// a typed 400 response, never a panic.
pub fn parse_id(raw: &str) -> Result<i64, (StatusCode, Json<ApiResponse<()>>)> {
    raw.parse::<i64>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!(
                "Invalid id: '{raw}'. Must be an integer."
            ))),
        )
    })
}
