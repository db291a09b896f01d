//! Email and password authentication for todotable.
//!
//! This crate provides:
//! - Argon2id password hashing behind the core `PasswordHasher` seam
//! - In-memory session storage
//! - Axum extractors resolving the signed-in user
//! - Signup, login, logout and account routes

mod config;
mod error;
mod extractors;
mod handlers;
mod password;
mod sessions;
mod state;

pub use config::{AuthConfig, MAX_SESSION_TTL_DAYS};
pub use error::AuthError;
pub use extractors::{session_id_from_headers, CurrentUser};
pub use handlers::{auth_routes, AuthResponse, LoginRequest, SignupRequest};
pub use password::{Argon2Hasher, DEFAULT_ITERATIONS, DEFAULT_MEMORY_KIB, DEFAULT_PARALLELISM};
pub use sessions::SessionStore;
pub use state::AuthState;
