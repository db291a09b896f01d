use serde::{Deserialize, Serialize};

use crate::storage::KeyError;

/// Prefix shared by every user partition key.
pub const USER_ID_PREFIX: &str = "email#";

/// Identifier of a user, derived from their email.
///
/// Pattern: `email#<email>`. The same value is the partition key for the
/// user's identity row, credential row and todos.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Derive the id for an email address.
    pub fn from_email(email: &str) -> Self {
        Self(format!("{USER_ID_PREFIX}{email}"))
    }

    /// Parse a stored partition key back into a user id.
    pub fn parse(raw: impl Into<String>) -> Result<Self, KeyError> {
        let raw = raw.into();
        match raw.strip_prefix(USER_ID_PREFIX) {
            Some(email) if !email.is_empty() => Ok(Self(raw)),
            _ => Err(KeyError::InvalidUserId(raw)),
        }
    }

    /// The email this id was derived from.
    pub fn email(&self) -> &str {
        &self.0[USER_ID_PREFIX.len()..]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            id: UserId::from_email(&email),
            email,
        }
    }
}

/// Salted one-way hash of a password, in PHC string format.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(phc: impl Into<String>) -> Self {
        Self(phc.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hashes stay out of logs.
impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}
