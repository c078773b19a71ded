use axum::{
    Json,
    body::Body,
    extract::{FromRequestParts, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use db::models::user::{self, Role};
use sea_orm::DatabaseConnection;

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Extracts and verifies the caller, then inserts the `AuthUser` back into
/// the request extensions for downstream handlers.
async fn extract_and_insert_auth_user(
    state: &AppState,
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), (StatusCode, Json<ApiResponse<()>>)> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, state)
        .await
        .map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Unauthorized access")),
            )
        })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Guard for routes that only require a verified caller.
pub async fn allow_authenticated(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<()>>)> {
    let (req, _user) = extract_and_insert_auth_user(&app_state, req).await?;

    Ok(next.run(req).await)
}

/// Admin-only guard: the caller must verify *and* have role = admin in the
/// users table.
pub async fn allow_admin(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<()>>)> {
    let (req, user) = extract_and_insert_auth_user(&app_state, req).await?;

    if !is_admin(app_state.db(), user.email()).await {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("Admin access required")),
        ));
    }

    Ok(next.run(req).await)
}

/// A stored-role lookup; DB errors deny access (fail-safe).
async fn is_admin(db: &DatabaseConnection, email: &str) -> bool {
    match user::Model::find_by_email(db, email).await {
        Ok(Some(u)) => u.role == Role::Admin,
        Ok(None) => false,
        Err(e) => {
            tracing::warn!(
                error = %e,
                email,
                "DB error while checking role; denying access"
            );
            false
        }
    }
}
