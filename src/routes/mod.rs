use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::{error::ErrorBody, state::AppState};

pub mod doc;
pub mod favorites;
pub mod health;

/// Build the full router. Layers are added by the caller.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/favorites", favorites::router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(format!("Not Found: {}", uri.path()))),
    )
}
