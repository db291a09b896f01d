use std::sync::Arc;

use crate::storage::{
    item_to_todo, item_to_todo_list_item, todo_sk_prefix, todo_to_item, RepositoryError, Result,
    SortKey, TableClient,
};
use crate::user::UserId;

use super::{Todo, TodoId, TodoListItem};

/// Todo records over the table, always scoped by the owning user.
///
/// Every row lives in its owner's partition, so a lookup with another
/// user's id simply misses.
#[derive(Clone)]
pub struct TodoStore {
    table: Arc<dyn TableClient>,
}

impl TodoStore {
    pub fn new(table: Arc<dyn TableClient>) -> Self {
        Self { table }
    }

    /// Point lookup. A missing todo is `Ok(None)`.
    pub async fn get_todo(&self, user_id: &UserId, id: &TodoId) -> Result<Option<Todo>> {
        match self.table.get(user_id, &SortKey::Todo(id.clone())).await? {
            Some(item) => Ok(Some(item_to_todo(&item)?)),
            None => Ok(None),
        }
    }

    /// All of the user's todos, in the order the table returns them.
    pub async fn list_todos(&self, user_id: &UserId) -> Result<Vec<TodoListItem>> {
        let items = self.table.query_prefix(user_id, todo_sk_prefix()).await?;
        items.iter().map(item_to_todo_list_item).collect()
    }

    pub async fn create_todo(
        &self,
        user_id: &UserId,
        title: &str,
        description: &str,
        is_complete: bool,
    ) -> Result<Todo> {
        let todo = self
            .upsert_todo(TodoId::generate(), user_id, title, description, is_complete)
            .await?;

        tracing::info!(todo_id = %todo.id, user_id = %user_id, "Created todo");
        Ok(todo)
    }

    /// Unconditional overwrite: creates the row or replaces every field.
    pub async fn upsert_todo(
        &self,
        id: TodoId,
        user_id: &UserId,
        title: &str,
        description: &str,
        is_complete: bool,
    ) -> Result<Todo> {
        let todo = Todo {
            id,
            user_id: user_id.clone(),
            title: title.to_string(),
            description: description.to_string(),
            is_complete,
        };
        self.table.put(todo_to_item(&todo)).await?;
        Ok(todo)
    }

    /// Replaces only the completion flag.
    ///
    /// Read-then-write without a guard: a concurrent writer between the two
    /// steps is overwritten.
    ///
    /// # Errors
    ///
    /// `RepositoryError::NotFound` if the todo does not exist.
    pub async fn set_todo_completion(
        &self,
        user_id: &UserId,
        id: &TodoId,
        is_complete: bool,
    ) -> Result<Todo> {
        let todo = self
            .get_todo(user_id, id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "Todo",
                id: id.to_string(),
            })?;

        tracing::debug!(todo_id = %id, is_complete, "Setting todo completion");
        self.upsert_todo(
            todo.id,
            user_id,
            &todo.title,
            &todo.description,
            is_complete,
        )
        .await
    }

    /// Deleting a missing todo succeeds.
    pub async fn delete_todo(&self, user_id: &UserId, id: &TodoId) -> Result<()> {
        self.table
            .delete(user_id, &SortKey::Todo(id.clone()))
            .await?;

        tracing::info!(todo_id = %id, user_id = %user_id, "Deleted todo");
        Ok(())
    }
}
