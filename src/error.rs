use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Failures raised by a [`crate::store::FavoritesStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record already exists")]
    Duplicate,

    #[error("ORM error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("query error: {0}")]
    Query(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Favorites list not found")]
    NotFound,

    #[error("Favorites list already exists")]
    AlreadyExists,

    #[error("Item is already in favorites")]
    AlreadyInList,

    #[error("Favorites store unavailable")]
    StoreUnavailable(#[source] StoreError),

    #[error("Invalid or missing service token")]
    Forbidden,

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Invalid request body: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::AlreadyExists | AppError::AlreadyInList => StatusCode::CONFLICT,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidBody(rejection) => rejection.status(),
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::StoreUnavailable(source) => {
                tracing::error!(error = %source, "store request failed")
            }
            AppError::Internal(source) => tracing::error!(error = %source, "internal error"),
            _ => {}
        }

        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
