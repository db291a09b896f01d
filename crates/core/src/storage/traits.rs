use async_trait::async_trait;

use crate::user::UserId;

use super::{Item, Result, SortKey};

/// Client for the single key-value table.
///
/// Each call is atomic for the one row it touches. There are no
/// multi-row transactions.
#[async_trait]
pub trait TableClient: Send + Sync {
    /// Point lookup. A missing row is `Ok(None)`.
    async fn get(&self, pk: &UserId, sk: &SortKey) -> Result<Option<Item>>;

    /// Unconditional write: creates the row or replaces it entirely.
    async fn put(&self, item: Item) -> Result<()>;

    /// Removes the row. Deleting a missing row succeeds.
    async fn delete(&self, pk: &UserId, sk: &SortKey) -> Result<()>;

    /// All rows in the partition whose sort key starts with `sk_prefix`,
    /// in ascending sort key order.
    async fn query_prefix(&self, pk: &UserId, sk_prefix: &str) -> Result<Vec<Item>>;

    /// Cheap round trip used by health checks.
    async fn ping(&self) -> Result<()>;
}
