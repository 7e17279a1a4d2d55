//! API Routes
//!
//! Route handlers organized by functionality.

pub mod charts;
pub mod dashboard;
pub mod health;
pub mod selection;

use axum::http::Uri;

use crate::api::error::ApiError;

/// Fallback for any path without a route
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
