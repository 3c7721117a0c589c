pub mod favorite_service;
pub mod owner_locks;

pub use favorite_service::FavoritesService;
