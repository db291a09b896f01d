mod store;
mod types;

pub use store::{Orphan, UserStore};
pub use types::{PasswordHash, User, UserId};
