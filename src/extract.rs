use axum::{Json, extract::FromRequest};

use crate::error::AppError;

/// `Json` whose rejections render as [`AppError`] `{"detail"}` bodies.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
