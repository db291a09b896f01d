mod error;
mod functions;
mod traits;
mod types;
mod validation;

pub use error::{AuthError, ValidationError};
pub use functions::{calculate_expiry, generate_session_id, is_session_expired};
pub use traits::{PasswordHasher, Result, SessionRepository};
pub use types::{Session, SessionId};
pub use validation::{
    validate_credentials, validate_email, validate_password, validate_redirect_to,
    validate_todo_fields, DEFAULT_REDIRECT, MIN_PASSWORD_LEN,
};
