//! Sort key encoding for the single-table design.
//!
//! Every row lives under a user partition (`email#<email>`). The sort key
//! tells the row kinds apart:
//!
//! | Row        | Sort key        |
//! |------------|-----------------|
//! | identity   | `email`         |
//! | credential | `password`      |
//! | todo       | `todo#<todo_id>`|

use crate::todo::TodoId;

use super::KeyError;

/// Separator between a sort key prefix and the id it carries.
pub const KEY_SEPARATOR: char = '#';

pub const EMAIL_SK: &str = "email";
pub const PASSWORD_SK: &str = "password";
pub const TODO_PREFIX: &str = "todo#";

/// Discriminated sort key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// The user's identity row.
    Email,
    /// The user's credential row.
    Password,
    /// One of the user's todos.
    Todo(TodoId),
}

impl SortKey {
    pub fn encode(&self) -> String {
        match self {
            SortKey::Email => EMAIL_SK.to_string(),
            SortKey::Password => PASSWORD_SK.to_string(),
            SortKey::Todo(id) => format!("{TODO_PREFIX}{id}"),
        }
    }

    pub fn decode(raw: &str) -> Result<Self, KeyError> {
        match raw {
            EMAIL_SK => Ok(SortKey::Email),
            PASSWORD_SK => Ok(SortKey::Password),
            _ if raw.starts_with(TODO_PREFIX) => {
                let id = TodoId::parse(&raw[TODO_PREFIX.len()..])
                    .map_err(|_| KeyError::UnknownSortKey(raw.to_string()))?;
                Ok(SortKey::Todo(id))
            }
            _ => Err(KeyError::UnknownSortKey(raw.to_string())),
        }
    }

    /// The todo id carried by this key, if any.
    pub fn todo_id(&self) -> Option<&TodoId> {
        match self {
            SortKey::Todo(id) => Some(id),
            _ => None,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Sort key prefix matching every todo row in a partition.
pub fn todo_sk_prefix() -> &'static str {
    TODO_PREFIX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_keys() {
        assert_eq!(SortKey::Email.encode(), "email");
        assert_eq!(SortKey::Password.encode(), "password");
        assert_eq!(SortKey::decode("email").unwrap(), SortKey::Email);
        assert_eq!(SortKey::decode("password").unwrap(), SortKey::Password);
    }

    #[test]
    fn test_todo_key() {
        let id = TodoId::parse("550e8400-e29b-41d4-a716-446655440003").unwrap();
        let sk = SortKey::Todo(id.clone());
        assert_eq!(sk.encode(), "todo#550e8400-e29b-41d4-a716-446655440003");
        assert_eq!(sk.todo_id(), Some(&id));
        assert!(sk.encode().starts_with(todo_sk_prefix()));
    }

    #[test]
    fn test_round_trip_for_generated_ids() {
        for _ in 0..32 {
            let sk = SortKey::Todo(TodoId::generate()).encode();
            assert_eq!(SortKey::decode(&sk).unwrap().encode(), sk);
        }
    }

    #[test]
    fn test_decode_rejects_unknown_keys() {
        assert_eq!(
            SortKey::decode("note#1"),
            Err(KeyError::UnknownSortKey("note#1".to_string()))
        );
        assert!(SortKey::decode("todo#").is_err());
        assert!(SortKey::decode("todo#a#b").is_err());
        assert!(SortKey::decode("").is_err());
    }
}
