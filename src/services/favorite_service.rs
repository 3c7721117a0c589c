use std::sync::Arc;

use crate::{
    error::{AppError, AppResult, StoreError},
    models::{FavoritesList, ItemType},
    services::owner_locks::OwnerLocks,
    store::FavoritesStore,
};

/// Favorites list operations on top of a [`FavoritesStore`].
///
/// Mutations of one owner's record run one at a time, so the existence check
/// in [`FavoritesService::add_item`] and the read-modify-write in
/// [`FavoritesService::remove_item`] cannot interleave with each other.
#[derive(Clone)]
pub struct FavoritesService {
    store: Arc<dyn FavoritesStore>,
    locks: OwnerLocks,
}

fn require_id(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be empty")));
    }
    Ok(())
}

fn unavailable(err: StoreError) -> AppError {
    tracing::warn!(error = %err, "favorites store call failed");
    AppError::StoreUnavailable(err)
}

impl FavoritesService {
    pub fn new(store: Arc<dyn FavoritesStore>) -> Self {
        Self {
            store,
            locks: OwnerLocks::new(),
        }
    }

    pub fn store(&self) -> &Arc<dyn FavoritesStore> {
        &self.store
    }

    async fn fetch_existing(&self, owner_id: &str) -> AppResult<FavoritesList> {
        self.store
            .fetch(owner_id)
            .await
            .map_err(unavailable)?
            .ok_or(AppError::NotFound)
    }

    pub async fn get_favorites(&self, owner_id: &str) -> AppResult<FavoritesList> {
        require_id(owner_id, "userId")?;
        self.fetch_existing(owner_id).await
    }

    pub async fn create_favorites(&self, owner_id: &str) -> AppResult<FavoritesList> {
        require_id(owner_id, "ownerId")?;
        let list = FavoritesList::empty(owner_id);
        match self.store.insert(&list).await {
            Ok(()) => {
                tracing::info!(owner_id, "favorites list created");
                Ok(list)
            }
            Err(StoreError::Duplicate) => Err(AppError::AlreadyExists),
            Err(err) => Err(unavailable(err)),
        }
    }

    pub async fn add_item(&self, owner_id: &str, item_id: &str, kind: ItemType) -> AppResult<()> {
        require_id(owner_id, "userId")?;
        require_id(item_id, "id")?;
        let _guard = self.locks.acquire(owner_id).await;

        let list = self.fetch_existing(owner_id).await?;
        if list.contains(kind, item_id) {
            return Err(AppError::AlreadyInList);
        }

        // The store append is conditional too, which covers writers in other
        // processes that do not share this lock table.
        let appended = self
            .store
            .append(owner_id, kind, item_id)
            .await
            .map_err(unavailable)?;
        if !appended {
            return Err(AppError::AlreadyInList);
        }

        tracing::debug!(owner_id, item_id, ?kind, "favorite added");
        Ok(())
    }

    /// Removing an item that is not in the list succeeds without a write.
    pub async fn remove_item(
        &self,
        owner_id: &str,
        item_id: &str,
        kind: ItemType,
    ) -> AppResult<()> {
        require_id(owner_id, "userId")?;
        require_id(item_id, "id")?;
        let _guard = self.locks.acquire(owner_id).await;

        let mut list = self.fetch_existing(owner_id).await?;
        let items = list.items_mut(kind);
        let before = items.len();
        items.retain(|id| id != item_id);
        if items.len() == before {
            return Ok(());
        }

        let replaced = self
            .store
            .replace(owner_id, kind, list.items(kind))
            .await
            .map_err(unavailable)?;
        if !replaced {
            return Err(AppError::NotFound);
        }

        tracing::debug!(owner_id, item_id, ?kind, "favorite removed");
        Ok(())
    }

    /// Deleting an owner without a list succeeds.
    pub async fn delete_favorites(&self, owner_id: &str) -> AppResult<()> {
        require_id(owner_id, "ownerId")?;
        let _guard = self.locks.acquire(owner_id).await;

        self.store.delete(owner_id).await.map_err(|err| {
            tracing::warn!(error = %err, owner_id, "favorites delete failed");
            AppError::UnprocessableEntity(format!("could not delete favorites of {owner_id}"))
        })?;

        tracing::info!(owner_id, "favorites list deleted");
        Ok(())
    }
}
