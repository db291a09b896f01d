//! Test doubles shared by the store tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::auth::{self, PasswordHasher};
use crate::storage::{InMemoryTable, Item, Result, SortKey, TableClient};
use crate::user::{PasswordHash, UserId};

/// Reversible "hash" that counts verifications.
pub struct FakeHasher {
    decoy: PasswordHash,
    verifications: AtomicUsize,
}

impl Default for FakeHasher {
    fn default() -> Self {
        Self {
            decoy: PasswordHash::new("fake$decoy"),
            verifications: AtomicUsize::new(0),
        }
    }
}

impl FakeHasher {
    pub fn verifications(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }
}

impl PasswordHasher for FakeHasher {
    fn hash(&self, plaintext: &str) -> auth::Result<PasswordHash> {
        Ok(PasswordHash::new(format!("fake${plaintext}")))
    }

    fn verify(&self, plaintext: &str, hash: &PasswordHash) -> bool {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        hash.as_str() == format!("fake${plaintext}")
    }

    fn decoy(&self) -> &PasswordHash {
        &self.decoy
    }
}

/// Table that silently discards writes to one kind of row.
pub struct DroppingTable {
    inner: InMemoryTable,
    dropped: SortKey,
}

impl DroppingTable {
    pub fn dropping(dropped: SortKey) -> Self {
        Self {
            inner: InMemoryTable::new(),
            dropped,
        }
    }
}

#[async_trait]
impl TableClient for DroppingTable {
    async fn get(&self, pk: &UserId, sk: &SortKey) -> Result<Option<Item>> {
        self.inner.get(pk, sk).await
    }

    async fn put(&self, item: Item) -> Result<()> {
        if item.sk == self.dropped {
            return Ok(());
        }
        self.inner.put(item).await
    }

    async fn delete(&self, pk: &UserId, sk: &SortKey) -> Result<()> {
        self.inner.delete(pk, sk).await
    }

    async fn query_prefix(&self, pk: &UserId, sk_prefix: &str) -> Result<Vec<Item>> {
        self.inner.query_prefix(pk, sk_prefix).await
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// Table that stops right after writing one kind of row until resumed.
pub struct PausingTable {
    inner: InMemoryTable,
    paused_on: SortKey,
    reached: Notify,
    resumed: Notify,
}

impl PausingTable {
    pub fn pausing_after(paused_on: SortKey) -> Self {
        Self {
            inner: InMemoryTable::new(),
            paused_on,
            reached: Notify::new(),
            resumed: Notify::new(),
        }
    }

    /// Waits until a writer is held after its write.
    pub async fn paused(&self) {
        self.reached.notified().await;
    }

    pub fn resume(&self) {
        self.resumed.notify_one();
    }
}

#[async_trait]
impl TableClient for PausingTable {
    async fn get(&self, pk: &UserId, sk: &SortKey) -> Result<Option<Item>> {
        self.inner.get(pk, sk).await
    }

    async fn put(&self, item: Item) -> Result<()> {
        let pause = item.sk == self.paused_on;
        self.inner.put(item).await?;
        if pause {
            self.reached.notify_one();
            self.resumed.notified().await;
        }
        Ok(())
    }

    async fn delete(&self, pk: &UserId, sk: &SortKey) -> Result<()> {
        self.inner.delete(pk, sk).await
    }

    async fn query_prefix(&self, pk: &UserId, sk_prefix: &str) -> Result<Vec<Item>> {
        self.inner.query_prefix(pk, sk_prefix).await
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
