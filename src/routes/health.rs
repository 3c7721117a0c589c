use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
    pub store: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = HealthData),
        (status = 503, description = "Store unreachable", body = HealthData),
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthData>) {
    match state.favorites.store().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthData {
                status: "ok".to_string(),
                store: "ok".to_string(),
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "health check: store ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthData {
                    status: "degraded".to_string(),
                    store: "unavailable".to_string(),
                }),
            )
        }
    }
}
