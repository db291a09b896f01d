//! Item conversion functions.
//!
//! Pure functions mapping domain types onto table rows and back.

use crate::todo::{Todo, TodoListItem};
use crate::user::{PasswordHash, User, UserId};

use super::{Item, RepositoryError, SortKey};

const ATTR_EMAIL: &str = "email";
const ATTR_PASSWORD: &str = "password";
const ATTR_TITLE: &str = "title";
const ATTR_DESCRIPTION: &str = "description";
const ATTR_IS_COMPLETE: &str = "isComplete";

// ============================================================================
// User conversions
// ============================================================================

/// Identity row for a user: `(email#<email>, email)`.
pub fn identity_item(user: &User) -> Item {
    Item::new(user.id.clone(), SortKey::Email).with_string(ATTR_EMAIL, user.email.clone())
}

pub fn item_to_user(item: &Item) -> Result<User, RepositoryError> {
    Ok(User {
        id: item.pk.clone(),
        email: item.get_string(ATTR_EMAIL)?.to_string(),
    })
}

/// Credential row for a user: `(email#<email>, password)`.
pub fn credential_item(id: &UserId, hash: &PasswordHash) -> Item {
    Item::new(id.clone(), SortKey::Password).with_string(ATTR_PASSWORD, hash.as_str())
}

pub fn item_to_credential(item: &Item) -> Result<PasswordHash, RepositoryError> {
    Ok(PasswordHash::new(item.get_string(ATTR_PASSWORD)?))
}

// ============================================================================
// Todo conversions
// ============================================================================

pub fn todo_to_item(todo: &Todo) -> Item {
    Item::new(todo.user_id.clone(), SortKey::Todo(todo.id.clone()))
        .with_string(ATTR_TITLE, todo.title.clone())
        .with_string(ATTR_DESCRIPTION, todo.description.clone())
        .with_bool(ATTR_IS_COMPLETE, todo.is_complete)
}

pub fn item_to_todo(item: &Item) -> Result<Todo, RepositoryError> {
    Ok(Todo {
        id: todo_id_of(item)?,
        user_id: item.pk.clone(),
        title: item.get_string(ATTR_TITLE)?.to_string(),
        description: item.get_string(ATTR_DESCRIPTION)?.to_string(),
        is_complete: item.get_bool(ATTR_IS_COMPLETE)?,
    })
}

pub fn item_to_todo_list_item(item: &Item) -> Result<TodoListItem, RepositoryError> {
    Ok(TodoListItem {
        id: todo_id_of(item)?,
        title: item.get_string(ATTR_TITLE)?.to_string(),
        is_complete: item.get_bool(ATTR_IS_COMPLETE)?,
    })
}

fn todo_id_of(item: &Item) -> Result<crate::todo::TodoId, RepositoryError> {
    item.sk.todo_id().cloned().ok_or_else(|| {
        RepositoryError::InvalidData(format!("Not a todo row: {}", item.sk.encode()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::TodoId;

    fn sample_todo() -> Todo {
        Todo {
            id: TodoId::parse("550e8400-e29b-41d4-a716-446655440003").unwrap(),
            user_id: UserId::from_email("a@x.com"),
            title: "Buy milk".to_string(),
            description: "Whole, 2 liters".to_string(),
            is_complete: true,
        }
    }

    #[test]
    fn test_todo_item_has_correct_keys() {
        let item = todo_to_item(&sample_todo());
        assert_eq!(item.pk.as_str(), "email#a@x.com");
        assert_eq!(
            item.sk.encode(),
            "todo#550e8400-e29b-41d4-a716-446655440003"
        );
        assert!(item.get_bool("isComplete").unwrap());
    }

    #[test]
    fn test_todo_round_trip() {
        let todo = sample_todo();
        assert_eq!(item_to_todo(&todo_to_item(&todo)).unwrap(), todo);
    }

    #[test]
    fn test_list_item_projection() {
        let todo = sample_todo();
        let listed = item_to_todo_list_item(&todo_to_item(&todo)).unwrap();
        assert_eq!(listed, TodoListItem::from(&todo));
    }

    #[test]
    fn test_identity_row_is_not_a_todo() {
        let item = identity_item(&User::new("a@x.com"));
        assert!(matches!(
            item_to_todo(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_user_and_credential_rows() {
        let user = User::new("a@x.com");
        let item = identity_item(&user);
        assert_eq!(item.sk, SortKey::Email);
        assert_eq!(item_to_user(&item).unwrap(), user);

        let hash = PasswordHash::new("$argon2id$stub");
        let cred = credential_item(&user.id, &hash);
        assert_eq!(cred.sk, SortKey::Password);
        assert_eq!(item_to_credential(&cred).unwrap(), hash);
    }
}
