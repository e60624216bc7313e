use axum::http::Uri;

use crate::error::AppError;

pub mod activities;
pub mod health;
pub mod wellness;

/// Unmatched paths get the same JSON error envelope as the API.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
