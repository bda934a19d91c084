//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::error::{RepoError, ValidationError};
use blog_shared::{ErrorResponse, ProblemKind};
use thiserror::Error;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn kind(&self) -> ProblemKind {
        match self {
            AppError::NotFound(_) => ProblemKind::PostNotFound,
            AppError::BadRequest(_) => ProblemKind::InvalidRequest,
            AppError::Conflict(_) => ProblemKind::Conflict,
            AppError::Internal(_) => ProblemKind::Internal,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let problem = ErrorResponse::new(self.kind());
        let problem = match self {
            AppError::NotFound(detail)
            | AppError::BadRequest(detail)
            | AppError::Conflict(detail) => problem.with_detail(detail),
            // Internal details stay in the logs.
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                problem
            }
        };

        HttpResponse::build(self.status_code()).json(problem)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => AppError::Conflict(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_bad_requests() {
        let err = AppError::from(ValidationError::TitleTooLong { len: 35, max: 20 });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_failures_are_internal() {
        let err = AppError::from(RepoError::Connection("refused".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = AppError::from(RepoError::Constraint("slug taken".to_string()));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    async fn problem_of(err: AppError) -> ErrorResponse {
        let body = actix_web::body::to_bytes(err.error_response().into_body())
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn test_client_errors_carry_detail() {
        let problem = problem_of(AppError::Conflict("slug taken".to_string())).await;
        assert_eq!(problem.status, 409);
        assert_eq!(problem.detail.as_deref(), Some("slug taken"));

        let problem = problem_of(AppError::NotFound("Post 3 not found".to_string())).await;
        assert_eq!(problem.detail.as_deref(), Some("Post 3 not found"));
    }

    #[actix_web::test]
    async fn test_internal_errors_hide_detail() {
        let problem = problem_of(AppError::Internal("pool timed out".to_string())).await;
        assert_eq!(problem.status, 500);
        assert_eq!(problem.detail, None);
    }
}
