use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use todotable_core::auth::ValidationError;
use todotable_core::storage::{repository_error_to_status_code, RepositoryError};

/// Auth errors for the todotable_auth crate.
///
/// This wraps the core `AuthError` and adds the crate-level failures of
/// the signup and login flows.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Error from the core auth module (credentials, sessions, hashing)
    #[error(transparent)]
    Core(#[from] todotable_core::auth::AuthError),

    /// Rejected signup or login input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// User or todo storage failed
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Signup for an email that already has an account
    #[error("A user already exists with this email")]
    UserExists,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        use todotable_core::auth::AuthError as CoreError;

        let (status, message) = match &self {
            AuthError::Core(core_err) => match core_err {
                CoreError::InvalidCredentials => (
                    StatusCode::UNAUTHORIZED,
                    "Invalid email or password".to_string(),
                ),
                CoreError::SessionNotFound | CoreError::SessionExpired => {
                    (StatusCode::UNAUTHORIZED, self.to_string())
                }
                CoreError::Hashing(_) => {
                    tracing::error!("Auth error: {}", self);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )
                }
            },
            AuthError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AuthError::Repository(err) => {
                let status = StatusCode::from_u16(repository_error_to_status_code(err))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                if status.is_server_error() {
                    tracing::error!("Storage error during auth: {}", err);
                    (status, "Internal server error".to_string())
                } else {
                    (status, err.to_string())
                }
            }
            AuthError::UserExists => (StatusCode::CONFLICT, self.to_string()),
            AuthError::Config(_) => {
                tracing::error!("Config error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
