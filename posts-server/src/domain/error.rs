use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum DomainError {
    #[error("Missing `{0}` field")]
    MissingField(&'static str),

    #[error("Request path id {path} and request body id {body} must match")]
    IdMismatch { path: String, body: String },

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("unexpected domain error: {0}")]
    Unexpected(String),
}
