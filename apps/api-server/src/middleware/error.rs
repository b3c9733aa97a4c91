//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_core::DomainError;
use quill_core::ports::AuthError;
use quill_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    SignInRequired,
    InvalidCredentials,
    Validation(Vec<String>),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::SignInRequired => write!(f, "Sign-in required"),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::SignInRequired | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::SignInRequired => ErrorResponse::unauthorized("Sign in to continue."),
            AppError::InvalidCredentials => {
                ErrorResponse::unauthorized("The email or password is incorrect.")
            }
            AppError::Validation(errors) => ErrorResponse::validation(errors.clone()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DomainError::Validation(errors) => AppError::Validation(errors),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::InvalidCredentials,
            AuthError::SignInRequired => AppError::SignInRequired,
            AuthError::HashingError(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_status() {
        let not_found = AppError::from(DomainError::blog_not_found("blog-9"));
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let invalid = AppError::from(DomainError::Validation(vec!["title is required".into()]));
        assert_eq!(invalid.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_auth_errors_map_to_status() {
        assert_eq!(
            AppError::from(AuthError::SignInRequired).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(AuthError::HashingError("bad".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
