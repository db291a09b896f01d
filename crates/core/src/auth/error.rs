use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. The two cases are never told apart.
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("session not found")]
    SessionNotFound,

    #[error("session expired")]
    SessionExpired,

    #[error("password hashing failed: {0}")]
    Hashing(String),
}

/// Rejected user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email is invalid")]
    InvalidEmail,

    #[error("Password is required")]
    PasswordRequired,

    #[error("Password is too short")]
    PasswordTooShort,

    #[error("Title is required")]
    TitleRequired,

    #[error("Description is required")]
    DescriptionRequired,
}
