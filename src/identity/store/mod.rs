//! Persistence seam for accounts.
//!
//! The store's own uniqueness constraint on `username` is the only authority
//! for conflicts: `insert` must fail atomically with [`StoreError::Conflict`]
//! rather than relying on a prior lookup.

pub mod memory;
pub mod postgres;

pub use self::memory::MemoryStore;
pub use self::postgres::PostgresStore;

use super::account::{Account, NewAccount};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("username already exists")]
    Conflict,
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Create an account, returning it with its assigned id.
    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError>;

    /// Remove every account. Test teardown only.
    async fn delete_all(&self) -> Result<u64, StoreError>;

    /// Check the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
