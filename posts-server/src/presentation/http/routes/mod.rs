use axum::Router;
use axum::routing::get;

use crate::presentation::AppState;
use crate::presentation::http::app_error::AppError;
use crate::presentation::http::handlers::health::health_handler;

pub(crate) mod posts;

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .nest("/posts", posts::router())
        .method_not_allowed_fallback(fallback)
        .with_state(state)
}

/// Unknown paths and unknown methods on known paths both answer 404.
pub(crate) async fn fallback() -> AppError {
    AppError::NotFound
}
