//! HTTP handlers for the Smart Irrigation Assistant

use axum::extract::FromRequest;

use crate::error::AppError;

pub mod chat;
pub mod estimate;
pub mod health;

pub use chat::*;
pub use estimate::*;
pub use health::*;

/// JSON body extractor whose rejections use the API error body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
