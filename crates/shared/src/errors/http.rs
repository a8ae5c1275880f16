use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound,
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound,
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                RepositoryError::Conflict(msg) => HttpError::BadRequest(msg),
                RepositoryError::InvalidValue(msg) => {
                    HttpError::BadRequest(format!("Invalid value: {msg}"))
                }
                other => {
                    error!("❌ Unhandled repository error: {other:?}");
                    HttpError::Internal("Database error".into())
                }
            },

            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),

            ServiceError::IdMismatch => HttpError::BadRequest("ID mismatch".into()),

            ServiceError::NotFound => HttpError::NotFound,

            ServiceError::ReferentialIntegrity(msg) => HttpError::BadRequest(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse::new(msg))).into_response()
    }
}
