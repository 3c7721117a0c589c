//! Persistence boundary for favorites lists.
//!
//! The service only talks to a [`FavoritesStore`]; which backend sits behind
//! it is decided once at startup.

use async_trait::async_trait;

use crate::{
    error::StoreResult,
    models::{FavoritesList, ItemType},
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryFavoritesStore;
pub use postgres::PgFavoritesStore;

/// Key-value record store holding one [`FavoritesList`] per owner.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Fetch the record keyed by `owner_id`.
    async fn fetch(&self, owner_id: &str) -> StoreResult<Option<FavoritesList>>;

    /// Insert a new record. Fails with [`crate::error::StoreError::Duplicate`]
    /// when the key is already taken; the check and the insert are one step.
    async fn insert(&self, list: &FavoritesList) -> StoreResult<()>;

    /// Append `item_id` to a category unless it is already there.
    ///
    /// Returns `false` when nothing was appended, either because the item is
    /// present or because the record does not exist.
    async fn append(&self, owner_id: &str, kind: ItemType, item_id: &str) -> StoreResult<bool>;

    /// Overwrite a whole category. Returns `false` when the record is gone.
    async fn replace(&self, owner_id: &str, kind: ItemType, ids: &[String]) -> StoreResult<bool>;

    /// Delete the record keyed by `owner_id`. Deleting a missing key is not an error.
    async fn delete(&self, owner_id: &str) -> StoreResult<()>;

    async fn ping(&self) -> StoreResult<()>;

    /// Release connections. Called once on shutdown.
    async fn close(&self) -> StoreResult<()>;
}
