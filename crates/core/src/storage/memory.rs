//! In-memory table for tests and local development.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::user::UserId;

use super::{Item, Result, SortKey, TableClient};

type RowKey = (String, String);

/// `TableClient` backed by an ordered map.
///
/// Rows are keyed by `(pk, encoded sk)`, so a prefix query walks a
/// contiguous range in the same byte order DynamoDB uses for string keys.
/// Clones share the same rows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTable {
    rows: Arc<RwLock<BTreeMap<RowKey, Item>>>,
}

impl InMemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows across all partitions.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

fn row_key(pk: &UserId, sk: &SortKey) -> RowKey {
    (pk.as_str().to_string(), sk.encode())
}

#[async_trait]
impl TableClient for InMemoryTable {
    async fn get(&self, pk: &UserId, sk: &SortKey) -> Result<Option<Item>> {
        let rows = self.rows.read().await;
        Ok(rows.get(&row_key(pk, sk)).cloned())
    }

    async fn put(&self, item: Item) -> Result<()> {
        let mut rows = self.rows.write().await;
        rows.insert(row_key(&item.pk, &item.sk), item);
        Ok(())
    }

    async fn delete(&self, pk: &UserId, sk: &SortKey) -> Result<()> {
        let mut rows = self.rows.write().await;
        rows.remove(&row_key(pk, sk));
        Ok(())
    }

    async fn query_prefix(&self, pk: &UserId, sk_prefix: &str) -> Result<Vec<Item>> {
        let rows = self.rows.read().await;
        let start = (pk.as_str().to_string(), sk_prefix.to_string());
        Ok(rows
            .range(start..)
            .take_while(|((row_pk, row_sk), _)| {
                row_pk == pk.as_str() && row_sk.starts_with(sk_prefix)
            })
            .map(|(_, item)| item.clone())
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
