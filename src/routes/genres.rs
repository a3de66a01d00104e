use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{models::Genre, routes::AppState};

/// Genre chips, Recommended first
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<Genre>> {
    let catalog = state.discovery.genre_catalog().await;
    Json(catalog.with_recommended())
}
