//! Application state.
//!
//! The storage backend is chosen at compile time via feature flags; every
//! store in the state shares the one table client.

use std::sync::Arc;

use axum::extract::FromRef;

use todotable_auth::{Argon2Hasher, AuthState, SessionStore};
use todotable_core::auth::PasswordHasher;
use todotable_core::storage::TableClient;
use todotable_core::todo::TodoStore;
use todotable_core::user::UserStore;

use crate::config::Config;

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!("Cannot enable both 'dynamodb' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub todos: TodoStore,
    /// Kept for health checks.
    pub table: Arc<dyn TableClient>,
}

impl AppState {
    fn build(
        table: Arc<dyn TableClient>,
        hasher: Arc<dyn PasswordHasher>,
        config: &Config,
    ) -> Self {
        let users = UserStore::new(table.clone(), hasher);
        let todos = TodoStore::new(table.clone());
        let auth = AuthState::new(
            Arc::new(SessionStore::new()),
            users,
            todos.clone(),
            config.auth.clone(),
        );

        Self { auth, todos, table }
    }

    fn hasher(config: &Config) -> Result<Arc<dyn PasswordHasher>, anyhow::Error> {
        let hasher = Argon2Hasher::new(
            config.argon2_memory_kib,
            config.argon2_iterations,
            config.argon2_parallelism,
        )?;
        tracing::info!(?hasher, "Initialized password hasher");
        Ok(Arc::new(hasher))
    }
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryTable;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for testing without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            let table = Arc::new(InMemoryTable::new());
            Ok(Self::build(table, Self::hasher(config)?, config))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::DynamoDbTable;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_dynamodb::Client::new(&aws_config);
            let table = Arc::new(DynamoDbTable::new(
                client,
                config.dynamodb_table_name.clone(),
            ));

            tracing::info!(table = %config.dynamodb_table_name, "Using DynamoDB storage");
            Ok(Self::build(table, Self::hasher(config)?, config))
        }
    }
}
