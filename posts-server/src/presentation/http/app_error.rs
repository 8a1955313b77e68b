use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::error::DomainError;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Not found")]
    NotFound,
}

pub(crate) type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Domain(err) => match &err {
                DomainError::MissingField(_) | DomainError::IdMismatch { .. } => {
                    warn!(error = %err, "request rejected");
                    (StatusCode::BAD_REQUEST, err.to_string())
                }
                DomainError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
                DomainError::Unexpected(cause) => {
                    error!(%cause, "storage failure");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        INTERNAL_ERROR_MESSAGE.to_string(),
                    )
                }
            },
            AppError::InvalidBody(rejection) => {
                warn!(error = %rejection, "request body rejected");
                let status = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    StatusCode::PAYLOAD_TOO_LARGE
                } else {
                    StatusCode::BAD_REQUEST
                };
                (status, rejection.body_text())
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::AppError;
    use crate::domain::error::DomainError;

    #[test]
    fn domain_errors_map_to_status_codes() {
        let cases = [
            (DomainError::MissingField("title"), StatusCode::BAD_REQUEST),
            (
                DomainError::IdMismatch {
                    path: "a".to_string(),
                    body: "b".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (DomainError::NotFound("post".to_string()), StatusCode::NOT_FOUND),
            (
                DomainError::Unexpected("db down".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
