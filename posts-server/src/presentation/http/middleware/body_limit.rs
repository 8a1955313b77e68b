use axum::Router;
use axum::extract::DefaultBodyLimit;

/// Oversized bodies surface as extractor rejections, so they are answered
/// through `AppError` like every other client error.
pub(crate) fn apply_body_limit(router: Router, limit_bytes: usize) -> Router {
    router.layer(DefaultBodyLimit::max(limit_bytes))
}
