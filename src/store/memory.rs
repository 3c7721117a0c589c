use std::{
    collections::HashMap,
    sync::atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::{StoreError, StoreResult},
    models::{FavoritesList, ItemType},
    store::FavoritesStore,
};

/// In-process store for local runs and tests.
#[derive(Default)]
pub struct MemoryFavoritesStore {
    records: RwLock<HashMap<String, FavoritesList>>,
    unavailable: AtomicBool,
}

impl MemoryFavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store switched off".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl FavoritesStore for MemoryFavoritesStore {
    async fn fetch(&self, owner_id: &str) -> StoreResult<Option<FavoritesList>> {
        self.check()?;
        Ok(self.records.read().await.get(owner_id).cloned())
    }

    async fn insert(&self, list: &FavoritesList) -> StoreResult<()> {
        self.check()?;
        let mut records = self.records.write().await;
        if records.contains_key(&list.owner_id) {
            return Err(StoreError::Duplicate);
        }
        records.insert(list.owner_id.clone(), list.clone());
        Ok(())
    }

    async fn append(&self, owner_id: &str, kind: ItemType, item_id: &str) -> StoreResult<bool> {
        self.check()?;
        let mut records = self.records.write().await;
        let Some(list) = records.get_mut(owner_id) else {
            return Ok(false);
        };
        if list.contains(kind, item_id) {
            return Ok(false);
        }
        list.items_mut(kind).push(item_id.to_owned());
        Ok(true)
    }

    async fn replace(&self, owner_id: &str, kind: ItemType, ids: &[String]) -> StoreResult<bool> {
        self.check()?;
        let mut records = self.records.write().await;
        match records.get_mut(owner_id) {
            Some(list) => {
                *list.items_mut(kind) = ids.to_vec();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, owner_id: &str) -> StoreResult<()> {
        self.check()?;
        self.records.write().await.remove(owner_id);
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check()
    }

    async fn close(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_is_unique_per_owner() {
        let store = MemoryFavoritesStore::new();
        store.insert(&FavoritesList::empty("a")).await.unwrap();
        assert!(matches!(
            store.insert(&FavoritesList::empty("a")).await,
            Err(StoreError::Duplicate)
        ));
    }

    #[tokio::test]
    async fn append_skips_present_items_and_missing_records() {
        let store = MemoryFavoritesStore::new();
        assert!(!store.append("a", ItemType::Product, "p").await.unwrap());

        store.insert(&FavoritesList::empty("a")).await.unwrap();
        assert!(store.append("a", ItemType::Product, "p").await.unwrap());
        assert!(!store.append("a", ItemType::Product, "p").await.unwrap());
        assert!(store.append("a", ItemType::Component, "p").await.unwrap());

        let list = store.fetch("a").await.unwrap().unwrap();
        assert_eq!(list.product_ids, vec!["p"]);
        assert_eq!(list.component_ids, vec!["p"]);
    }

    #[tokio::test]
    async fn switched_off_store_fails_every_call() {
        let store = MemoryFavoritesStore::new();
        store.set_unavailable(true);
        assert!(matches!(store.fetch("a").await, Err(StoreError::Unavailable(_))));
        assert!(matches!(store.delete("a").await, Err(StoreError::Unavailable(_))));

        store.set_unavailable(false);
        assert!(store.ping().await.is_ok());
    }
}
