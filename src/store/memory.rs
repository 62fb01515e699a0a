//! In-memory store backend for testing and development

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::models::{Account, NewAccount};
use super::{AccountStore, StoreError};

/// In-memory account store.
///
/// Records live in a `BTreeMap` keyed by id, so `all` iterates in ascending
/// id order. Not durable; every instance starts empty.
pub struct MemoryStore {
    data: Arc<RwLock<MemoryInner>>,
}

struct MemoryInner {
    /// Primary storage, keyed by account id
    accounts: BTreeMap<i32, Account>,

    /// Next id to hand out on create
    next_id: i32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(MemoryInner {
                accounts: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn create(&self, account: NewAccount) -> Result<Account, StoreError> {
        let mut inner = self.data.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let account = account.with_id(id);
        inner.accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn find(&self, id: i32) -> Result<Option<Account>, StoreError> {
        let inner = self.data.read().await;
        Ok(inner.accounts.get(&id).cloned())
    }

    async fn update(&self, account: &Account) -> Result<(), StoreError> {
        let mut inner = self.data.write().await;
        // Overwrite-if-present: updating an absent id is a no-op
        if inner.accounts.contains_key(&account.id) {
            inner.accounts.insert(account.id, account.clone());
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let mut inner = self.data.write().await;
        inner.accounts.remove(&id);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Account>, StoreError> {
        let inner = self.data.read().await;
        Ok(inner.accounts.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(name: &str) -> NewAccount {
        NewAccount {
            name: name.to_string(),
            email: format!("{}@example.com", name),
            address: "123 Main St".to_string(),
            phone_number: "555-1212".to_string(),
            date_joined: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let a = store.create(sample("alice")).await.unwrap();
        let b = store.create(sample("bob")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn find_returns_created_record() {
        let store = MemoryStore::new();
        let created = store.create(sample("alice")).await.unwrap();
        let found = store.find(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn find_after_delete_returns_none() {
        let store = MemoryStore::new();
        let created = store.create(sample("alice")).await.unwrap();
        store.delete(created.id).await.unwrap();
        assert_eq!(store.find(created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_absent_id_is_noop() {
        let store = MemoryStore::new();
        store.delete(12345).await.unwrap();
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_keeps_id() {
        let store = MemoryStore::new();
        let mut account = store.create(sample("alice")).await.unwrap();
        account.email = "new@example.com".to_string();
        store.update(&account).await.unwrap();

        let found = store.find(account.id).await.unwrap().unwrap();
        assert_eq!(found.email, "new@example.com");
        assert_eq!(found.id, account.id);
    }

    #[tokio::test]
    async fn update_absent_id_is_noop() {
        let store = MemoryStore::new();
        let account = sample("ghost").with_id(99);
        store.update(&account).await.unwrap();
        assert_eq!(store.find(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn all_returns_every_record_in_id_order() {
        let store = MemoryStore::new();
        for name in ["alice", "bob", "carol"] {
            store.create(sample(name)).await.unwrap();
        }
        let accounts = store.all().await.unwrap();
        assert_eq!(accounts.len(), 3);
        let names: Vec<_> = accounts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);
    }

    #[tokio::test]
    async fn all_on_empty_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.all().await.unwrap().is_empty());
    }
}
