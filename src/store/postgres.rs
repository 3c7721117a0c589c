use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, SqlErr};

use crate::{
    entity::{Favorites, favorites::ActiveModel as FavoritesActive},
    error::{StoreError, StoreResult},
    models::{FavoritesList, ItemType},
    store::FavoritesStore,
};

/// Favorites store backed by the `favorites` table in PostgreSQL.
#[derive(Clone)]
pub struct PgFavoritesStore {
    orm: DatabaseConnection,
}

impl PgFavoritesStore {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self { orm }
    }
}

fn insert_error(err: DbErr) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => StoreError::Duplicate,
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl FavoritesStore for PgFavoritesStore {
    async fn fetch(&self, owner_id: &str) -> StoreResult<Option<FavoritesList>> {
        let model = Favorites::find_by_id(owner_id.to_owned())
            .one(&self.orm)
            .await?;
        Ok(model.map(FavoritesList::from))
    }

    async fn insert(&self, list: &FavoritesList) -> StoreResult<()> {
        let active = FavoritesActive {
            owner_id: Set(list.owner_id.clone()),
            component_ids: Set(list.component_ids.clone()),
            product_ids: Set(list.product_ids.clone()),
        };
        Favorites::insert(active)
            .exec(&self.orm)
            .await
            .map_err(insert_error)?;
        Ok(())
    }

    async fn append(&self, owner_id: &str, kind: ItemType, item_id: &str) -> StoreResult<bool> {
        let column = kind.column();
        let sql = format!(
            r#"
            UPDATE favorites
            SET {column} = array_append({column}, $2)
            WHERE owner_id = $1 AND NOT ($2 = ANY({column}))
            "#
        );
        let result = sqlx::query(&sql)
            .bind(owner_id)
            .bind(item_id)
            .execute(self.orm.get_postgres_connection_pool())
            .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn replace(&self, owner_id: &str, kind: ItemType, ids: &[String]) -> StoreResult<bool> {
        let column = kind.column();
        let sql = format!("UPDATE favorites SET {column} = $2 WHERE owner_id = $1");
        let result = sqlx::query(&sql)
            .bind(owner_id)
            .bind(ids.to_vec())
            .execute(self.orm.get_postgres_connection_pool())
            .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn delete(&self, owner_id: &str) -> StoreResult<()> {
        Favorites::delete_by_id(owner_id.to_owned())
            .exec(&self.orm)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.orm.ping().await?;
        Ok(())
    }

    async fn close(&self) -> StoreResult<()> {
        self.orm.clone().close().await?;
        Ok(())
    }
}
