mod conversions;
mod error;
mod http_mapping;
mod item;
mod keys;
mod memory;
mod traits;

pub use conversions::{
    credential_item, identity_item, item_to_credential, item_to_todo, item_to_todo_list_item,
    item_to_user, todo_to_item,
};
pub use error::{KeyError, RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use item::{Attribute, Item};
pub use keys::{todo_sk_prefix, SortKey, EMAIL_SK, KEY_SEPARATOR, PASSWORD_SK, TODO_PREFIX};
pub use memory::InMemoryTable;
pub use traits::TableClient;
