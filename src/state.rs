use std::sync::Arc;

use crate::{middleware::auth::AccessGate, services::FavoritesService, store::FavoritesStore};

#[derive(Clone)]
pub struct AppState {
    pub favorites: FavoritesService,
    pub gate: AccessGate,
}

impl AppState {
    pub fn new(store: Arc<dyn FavoritesStore>, gate: AccessGate) -> Self {
        Self {
            favorites: FavoritesService::new(store),
            gate,
        }
    }
}
