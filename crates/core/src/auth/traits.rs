use async_trait::async_trait;

use crate::user::{PasswordHash, UserId};

use super::{AuthError, Session, SessionId};

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Session storage abstraction.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Store a new session.
    async fn create_session(&self, session: &Session) -> Result<()>;

    /// Retrieve session by ID.
    async fn get_session(&self, id: &SessionId) -> Result<Option<Session>>;

    /// Delete a specific session.
    async fn delete_session(&self, id: &SessionId) -> Result<()>;

    /// Delete all sessions for a user (logout-all, account deletion).
    async fn delete_user_sessions(&self, user_id: &UserId) -> Result<()>;
}

/// Slow, salted one-way password hash with its verification half.
///
/// Implementations are CPU bound; async callers run them on the blocking pool.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<PasswordHash>;

    /// `true` only when `plaintext` matches `hash`. Malformed hashes never match.
    fn verify(&self, plaintext: &str, hash: &PasswordHash) -> bool;

    /// A valid hash of no real password, verified against when an account
    /// does not exist so both login failures cost the same.
    fn decoy(&self) -> &PasswordHash;
}
