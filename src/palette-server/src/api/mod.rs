//! REST API routes and handlers.

mod colors;
mod health;
pub mod types;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

// Re-export types for external use
pub use types::{ColorPayload, HealthResponse};

/// Create the API routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        // Health and metrics
        .route("/health", get(health::health_check))
        .route("/metrics", get(health::get_metrics))
        // Colors
        .route("/colors", get(colors::list_colors))
        .route("/colors", post(colors::create_color))
        .route("/colors/{id}", get(colors::get_color))
        .route("/colors/{id}", put(colors::update_color))
        .route("/colors/{id}", delete(colors::delete_color))
}
