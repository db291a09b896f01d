use std::sync::Arc;

use crate::auth::PasswordHasher;
use crate::storage::{
    credential_item, identity_item, item_to_credential, item_to_user, RepositoryError, Result,
    SortKey, TableClient,
};

use super::{PasswordHash, User, UserId};

/// Which half of a user's row pair was removed as a leftover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orphan {
    /// A credential row with no identity row.
    Credential,
    /// An identity row with no credential row.
    Identity,
}

/// User identity and credential records over the table.
///
/// A user occupies two rows in its own partition: `email` (identity) and
/// `password` (credential). They are written and deleted one after the
/// other, never in a transaction, so a crash between the two writes can
/// leave one of them behind.
///
/// `create_user` writes the credential first, so a credential without an
/// identity is also what a signup looks like while it is still running.
/// Only `remove_orphaned_identity` is safe on the signup path. A leftover
/// credential is overwritten by the next `create_user` for that email, and
/// `reconcile_user` clears it in an explicit sweep.
#[derive(Clone)]
pub struct UserStore {
    table: Arc<dyn TableClient>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserStore {
    pub fn new(table: Arc<dyn TableClient>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { table, hasher }
    }

    /// Looks up the identity row. A missing user is `Ok(None)`.
    pub async fn get_user_by_id(&self, id: &UserId) -> Result<Option<User>> {
        match self.table.get(id, &SortKey::Email).await? {
            Some(item) => Ok(Some(item_to_user(&item)?)),
            None => Ok(None),
        }
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_id(&UserId::from_email(email)).await
    }

    pub(crate) async fn get_credential_by_email(
        &self,
        email: &str,
    ) -> Result<Option<PasswordHash>> {
        let id = UserId::from_email(email);
        match self.table.get(&id, &SortKey::Password).await? {
            Some(item) => Ok(Some(item_to_credential(&item)?)),
            None => Ok(None),
        }
    }

    /// Hashes the password, writes the credential row then the identity row,
    /// and returns the user as read back from the table.
    ///
    /// Existing rows for the same email are overwritten; callers check for an
    /// existing account first.
    ///
    /// # Errors
    ///
    /// `RepositoryError::Inconsistent` if the identity row cannot be read back
    /// right after being written.
    pub async fn create_user(&self, email: &str, password: &str) -> Result<User> {
        let user = User::new(email);
        let hash = self.hash_password(password).await?;

        self.table.put(credential_item(&user.id, &hash)).await?;
        self.table.put(identity_item(&user)).await?;

        let created = self.get_user_by_id(&user.id).await?.ok_or_else(|| {
            RepositoryError::Inconsistent {
                entity_type: "User",
                id: user.id.to_string(),
                reason: "identity row missing right after write".to_string(),
            }
        })?;

        tracing::info!(user_id = %created.id, "Created user");
        Ok(created)
    }

    /// Deletes both rows. Deleting a missing user succeeds.
    pub async fn delete_user(&self, email: &str) -> Result<()> {
        let id = UserId::from_email(email);
        self.table.delete(&id, &SortKey::Password).await?;
        self.table.delete(&id, &SortKey::Email).await?;

        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }

    /// Checks an email/password pair.
    ///
    /// Returns `Ok(None)` both for an unknown email and for a wrong password.
    /// An unknown email still costs one hash verification against the
    /// hasher's decoy.
    pub async fn verify_login(&self, email: &str, password: &str) -> Result<Option<User>> {
        let stored = self.get_credential_by_email(email).await?;
        if !self.check_password(password, stored).await? {
            tracing::debug!("Login rejected");
            return Ok(None);
        }

        self.get_user_by_email(email).await
    }

    /// Removes an identity row whose credential row is gone.
    ///
    /// That state only arises from an interrupted `delete_user`, never from a
    /// `create_user` in flight. Returns whether a row was removed.
    pub async fn remove_orphaned_identity(&self, email: &str) -> Result<bool> {
        let id = UserId::from_email(email);
        if self.table.get(&id, &SortKey::Email).await?.is_none()
            || self.table.get(&id, &SortKey::Password).await?.is_some()
        {
            return Ok(false);
        }

        self.table.delete(&id, &SortKey::Email).await?;
        tracing::warn!(user_id = %id, orphan = ?Orphan::Identity, "Removed orphaned user row");
        Ok(true)
    }

    /// Removes a credential row without an identity row, or the reverse.
    ///
    /// Must not run while a signup for the same email may be in progress: the
    /// credential of a half-finished `create_user` would be removed.
    pub async fn reconcile_user(&self, email: &str) -> Result<Option<Orphan>> {
        let id = UserId::from_email(email);
        let identity = self.table.get(&id, &SortKey::Email).await?;
        let credential = self.table.get(&id, &SortKey::Password).await?;

        let orphan = match (identity, credential) {
            (None, Some(_)) => {
                self.table.delete(&id, &SortKey::Password).await?;
                Some(Orphan::Credential)
            }
            (Some(_), None) => {
                self.table.delete(&id, &SortKey::Email).await?;
                Some(Orphan::Identity)
            }
            _ => None,
        };

        if let Some(orphan) = orphan {
            tracing::warn!(user_id = %id, ?orphan, "Removed orphaned user row");
        }
        Ok(orphan)
    }

    async fn hash_password(&self, password: &str) -> Result<PasswordHash> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| RepositoryError::Credential(e.to_string()))?
            .map_err(|e| RepositoryError::Credential(e.to_string()))
    }

    async fn check_password(&self, password: &str, stored: Option<PasswordHash>) -> Result<bool> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || match stored {
            Some(hash) => hasher.verify(&password, &hash),
            None => {
                hasher.verify(&password, hasher.decoy());
                false
            }
        })
        .await
        .map_err(|e| RepositoryError::Credential(e.to_string()))
    }
}
