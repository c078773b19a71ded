//! HTTP route table.
//!
//! Every (method, path) pair of the service is declared here, together with
//! its guard binding, so the auth and role requirements of the whole surface
//! are auditable in one place. Handlers never apply guards themselves.
//!
//! Three tiers:
//! - public — no token required
//! - authenticated — valid bearer token (`allow_authenticated`)
//! - admin — valid token and role = admin in the users table (`allow_admin`)

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, patch, post, put},
};

use crate::auth::guards::{allow_admin, allow_authenticated};
use crate::state::AppState;

pub mod auth;
pub mod classes;
pub mod common;
pub mod payments;
pub mod selections;
pub mod users;

async fn liveness() -> &'static str {
    "Course platform server is running"
}

pub fn routes(app_state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(liveness))
        .route("/jwt", post(auth::post::sign_token))
        .route(
            "/users/{email}",
            put(users::put::upsert_user).get(users::get::get_user),
        )
        .route("/users/instructors/fixed", get(users::get::list_instructors_fixed))
        .route("/users/instructors/all", get(users::get::list_instructors))
        .route("/classes", get(classes::get::list_classes))
        .route("/classes/oneClass/{id}", get(classes::get::get_class))
        .route("/classes/approved/fixed", get(classes::get::list_approved_fixed))
        .route("/classes/approved/all", get(classes::get::list_approved))
        .route("/classes/update/{id}", put(classes::put::update_class))
        .route(
            "/classes/selected",
            post(selections::post::create_selection).get(selections::get::list_selections),
        )
        .route(
            "/classes/selected/{id}",
            patch(selections::patch::mark_selected).delete(selections::delete::remove_selection),
        )
        .route("/classes/selected/pay/{id}", get(selections::get::get_selection))
        .route("/payments/{email}", get(payments::get::payment_history));

    let authenticated = Router::new()
        .route("/users/admin/{id}", get(users::get::check_admin))
        .route("/users/instructor/{id}", get(users::get::check_instructor))
        .route("/classes", post(classes::post::create_class))
        .route("/classes/instructor/{email}", get(classes::get::list_by_instructor))
        .route("/classes/denied/{email}", get(classes::get::list_denied_by_instructor))
        .route("/create-payment-intent", post(payments::post::create_payment_intent))
        .route("/payments", post(payments::post::record_payment))
        .route_layer(from_fn_with_state(app_state.clone(), allow_authenticated));

    let admin = Router::new()
        .route("/users", get(users::get::list_users))
        .route("/users/admin/{id}", patch(users::patch::make_admin))
        .route("/users/instructor/{id}", patch(users::patch::make_instructor))
        .route(
            "/classes/admin/{id}",
            patch(classes::patch::approve_class).put(classes::put::deny_class),
        )
        .route_layer(from_fn_with_state(app_state.clone(), allow_admin));

    public
        .merge(authenticated)
        .merge(admin)
        .with_state(app_state)
}
