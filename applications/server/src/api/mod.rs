/// API route modules
pub mod health;
pub mod user;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Routes served under `/api`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/user/getUserByGlobalName",
            post(user::get_user_by_global_name),
        )
        .route(
            "/user/getUserOnslaughtHistory",
            post(user::get_user_onslaught_history),
        )
}

/// Full application router
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", routes())
        .with_state(app_state)
}
