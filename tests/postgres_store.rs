use std::sync::Arc;

use favorites_api::{
    db::{create_orm_conn, run_migrations},
    error::AppError,
    models::ItemType,
    services::FavoritesService,
    store::{FavoritesStore, PgFavoritesStore},
};

// Runs against a real database; skipped when none is configured.
#[tokio::test]
async fn postgres_store_round_trip() -> anyhow::Result<()> {
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run postgres store tests."
            );
            return Ok(());
        }
    };

    let orm = create_orm_conn(&database_url).await?;
    run_migrations(&orm).await?;
    let store = Arc::new(PgFavoritesStore::new(orm));
    // Only this test's row is cleared; the database may hold real favorites.
    store.delete("pg-user").await?;
    let service = FavoritesService::new(store.clone());

    assert!(matches!(service.get_favorites("pg-user").await, Err(AppError::NotFound)));
    service.create_favorites("pg-user").await?;
    assert!(matches!(
        service.create_favorites("pg-user").await,
        Err(AppError::AlreadyExists)
    ));

    service.add_item("pg-user", "A", ItemType::Product).await?;
    service.add_item("pg-user", "B", ItemType::Product).await?;
    assert!(matches!(
        service.add_item("pg-user", "A", ItemType::Product).await,
        Err(AppError::AlreadyInList)
    ));
    // The conditional append refuses duplicates even without the service lock.
    assert!(!store.append("pg-user", ItemType::Product, "B").await?);

    service.remove_item("pg-user", "A", ItemType::Product).await?;
    let list = service.get_favorites("pg-user").await?;
    assert_eq!(list.product_ids, vec!["B"]);
    assert!(list.component_ids.is_empty());

    service.delete_favorites("pg-user").await?;
    assert!(matches!(service.get_favorites("pg-user").await, Err(AppError::NotFound)));

    store.ping().await?;
    store.close().await?;
    Ok(())
}
