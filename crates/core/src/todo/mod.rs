mod store;
mod types;

pub use store::TodoStore;
pub use types::{Todo, TodoId, TodoListItem};
