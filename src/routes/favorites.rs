use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::favorites::{ItemRequest, OwnerRequest},
    error::{AppResult, ErrorBody},
    extract::AppJson,
    middleware::auth::{OwnerId, ReadCaller, ServiceCaller},
    models::FavoritesList,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_favorites)
                .post(create_favorites)
                .delete(delete_favorites),
        )
        .route("/items", post(add_item).delete(remove_item))
}

#[utoipa::path(
    get,
    path = "/favorites",
    params(
        ("userId" = String, Header, description = "Owner of the favorites list")
    ),
    responses(
        (status = 200, description = "Favorites list of the owner", body = FavoritesList),
        (status = 403, description = "Invalid or missing service token", body = ErrorBody),
        (status = 404, description = "No favorites list for this owner", body = ErrorBody),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    _caller: ReadCaller,
    OwnerId(owner_id): OwnerId,
) -> AppResult<Json<FavoritesList>> {
    let list = state.favorites.get_favorites(&owner_id).await?;
    Ok(Json(list))
}

#[utoipa::path(
    post,
    path = "/favorites",
    request_body = OwnerRequest,
    responses(
        (status = 201, description = "Favorites list created", body = FavoritesList),
        (status = 403, description = "Invalid or missing service token", body = ErrorBody),
        (status = 409, description = "Favorites list already exists", body = ErrorBody),
        (status = 422, description = "Invalid request body", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn create_favorites(
    State(state): State<AppState>,
    _caller: ServiceCaller,
    AppJson(payload): AppJson<OwnerRequest>,
) -> AppResult<(StatusCode, Json<FavoritesList>)> {
    let list = state.favorites.create_favorites(&payload.owner_id).await?;
    Ok((StatusCode::CREATED, Json(list)))
}

#[utoipa::path(
    delete,
    path = "/favorites",
    request_body = OwnerRequest,
    responses(
        (status = 204, description = "Favorites list deleted"),
        (status = 403, description = "Invalid or missing service token", body = ErrorBody),
        (status = 422, description = "Delete failed or invalid request body", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn delete_favorites(
    State(state): State<AppState>,
    _caller: ServiceCaller,
    AppJson(payload): AppJson<OwnerRequest>,
) -> AppResult<StatusCode> {
    state.favorites.delete_favorites(&payload.owner_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/favorites/items",
    params(
        ("userId" = String, Header, description = "Owner of the favorites list")
    ),
    request_body = ItemRequest,
    responses(
        (status = 204, description = "Item added"),
        (status = 403, description = "Invalid or missing service token", body = ErrorBody),
        (status = 404, description = "No favorites list for this owner", body = ErrorBody),
        (status = 409, description = "Item is already in favorites", body = ErrorBody),
        (status = 422, description = "Invalid request body", body = ErrorBody),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn add_item(
    State(state): State<AppState>,
    _caller: ServiceCaller,
    OwnerId(owner_id): OwnerId,
    AppJson(payload): AppJson<ItemRequest>,
) -> AppResult<StatusCode> {
    state
        .favorites
        .add_item(&owner_id, &payload.id, payload.item_type)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/favorites/items",
    params(
        ("userId" = String, Header, description = "Owner of the favorites list")
    ),
    request_body = ItemRequest,
    responses(
        (status = 204, description = "Item removed, or it was not in the list"),
        (status = 403, description = "Invalid or missing service token", body = ErrorBody),
        (status = 404, description = "No favorites list for this owner", body = ErrorBody),
        (status = 422, description = "Invalid request body", body = ErrorBody),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn remove_item(
    State(state): State<AppState>,
    _caller: ServiceCaller,
    OwnerId(owner_id): OwnerId,
    AppJson(payload): AppJson<ItemRequest>,
) -> AppResult<StatusCode> {
    state
        .favorites
        .remove_item(&owner_id, &payload.id, payload.item_type)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
