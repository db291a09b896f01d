//! Application state for auth.

use std::sync::Arc;

use todotable_core::auth::SessionRepository;
use todotable_core::todo::TodoStore;
use todotable_core::user::UserStore;

use crate::config::AuthConfig;

/// Shared state for auth handlers.
///
/// The todo store is here because deleting an account deletes the
/// account's todos first.
#[derive(Clone)]
pub struct AuthState {
    pub sessions: Arc<dyn SessionRepository>,
    pub users: UserStore,
    pub todos: TodoStore,
    pub config: AuthConfig,
}

impl AuthState {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        users: UserStore,
        todos: TodoStore,
        config: AuthConfig,
    ) -> Self {
        Self {
            sessions,
            users,
            todos,
            config,
        }
    }
}
