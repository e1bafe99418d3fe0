use super::{AccountStore, StoreError};
use crate::identity::account::{Account, NewAccount};
use async_trait::async_trait;
use std::collections::{hash_map::Entry, HashMap};
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-process store keyed by username.
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }

    /// Overwrite the enrollment view of an existing account.
    ///
    /// Returns `false` when the username is unknown.
    #[cfg(test)]
    pub(crate) async fn seed_profile(
        &self,
        username: &str,
        enrolled_courses: Vec<Uuid>,
        credit_count: Option<f64>,
    ) -> bool {
        let mut accounts = self.accounts.write().await;
        let Some(account) = accounts.get_mut(username) else {
            return false;
        };
        account.enrolled_courses = enrolled_courses;
        account.credit_count = credit_count;
        true
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError> {
        let mut accounts = self.accounts.write().await;
        match accounts.entry(account.username.clone()) {
            Entry::Occupied(_) => Err(StoreError::Conflict),
            Entry::Vacant(slot) => Ok(slot.insert(account.into_account(Uuid::new_v4())).clone()),
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.read().await.get(username).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|account| account.id == id)
            .cloned())
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut accounts = self.accounts.write().await;
        let removed = accounts.len() as u64;
        accounts.clear();
        Ok(removed)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
