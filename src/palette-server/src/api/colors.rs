//! Color CRUD endpoints.
//!
//! Each handler is a direct pass-through to one store operation. PUT and
//! DELETE check existence first and then write; the two round-trips are
//! independent, matching the repository contract.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use palette_store::Color;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

use super::types::ColorPayload;

/// List all colors.
pub async fn list_colors(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Color>>> {
    let colors = state.store.find_all()?;
    Ok(Json(colors))
}

/// Get a color by id.
pub async fn get_color(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Json<Color>> {
    let color = state
        .store
        .find_by_id(id)?
        .ok_or_else(|| AppError::NotFound(format!("Color not found: {id}")))?;
    Ok(Json(color))
}

/// Create a color. Any client-supplied id is discarded; the store
/// assigns the identity.
pub async fn create_color(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ColorPayload>,
) -> AppResult<Response> {
    let saved = state.store.save(&payload.into_color(None))?;
    state.increment_counter("colors_created").await;

    // save with id: None always returns an assigned id
    let id = saved
        .id
        .ok_or_else(|| AppError::Internal("insert returned no id".to_string()))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/colors/{id}"))],
        Json(saved),
    )
        .into_response())
}

/// Full replace of a color. The id is forced to the path value.
pub async fn update_color(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<ColorPayload>,
) -> AppResult<Json<Color>> {
    if !state.store.exists(id)? {
        return Err(AppError::NotFound(format!("Color not found: {id}")));
    }

    let updated = state.store.save(&payload.into_color(Some(id)))?;
    state.increment_counter("colors_updated").await;
    Ok(Json(updated))
}

/// Delete a color.
pub async fn delete_color(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if !state.store.exists(id)? {
        return Err(AppError::NotFound(format!("Color not found: {id}")));
    }

    state.store.delete(id)?;
    state.increment_counter("colors_deleted").await;
    Ok(StatusCode::NO_CONTENT)
}
