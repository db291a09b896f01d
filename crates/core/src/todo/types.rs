use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::{KeyError, KEY_SEPARATOR};
use crate::user::UserId;

/// Identifier of a todo item.
///
/// Store-generated ids are hyphenated UUID v4 strings. Parsed ids must be
/// non-empty and must not contain the key separator, so a todo sort key
/// always decodes back to the id it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoId(String);

impl TodoId {
    /// Generate a fresh, collision-resistant id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn parse(raw: impl Into<String>) -> Result<Self, KeyError> {
        let raw = raw.into();
        if raw.is_empty() || raw.contains(KEY_SEPARATOR) {
            return Err(KeyError::InvalidTodoId(raw));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TodoId {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TodoId> for String {
    fn from(id: TodoId) -> Self {
        id.0
    }
}

/// A todo item owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub is_complete: bool,
}

/// Projection returned when listing a user's todos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListItem {
    pub id: TodoId,
    pub title: String,
    pub is_complete: bool,
}

impl From<&Todo> for TodoListItem {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id.clone(),
            title: todo.title.clone(),
            is_complete: todo.is_complete,
        }
    }
}
