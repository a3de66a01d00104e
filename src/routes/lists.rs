use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{ListKind, ListMembership, MovieId, MovieSummary},
    routes::AppState,
};

/// Every movie on one personal list
pub async fn list(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<ListKind>,
) -> AppResult<Json<Vec<MovieSummary>>> {
    Ok(Json(state.lists.movies(kind).await?))
}

/// Handler for the favorite/watchlist/watched buttons
pub async fn toggle(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<ListKind>,
    Json(movie): Json<MovieSummary>,
) -> AppResult<Json<ListMembership>> {
    Ok(Json(state.lists.toggle(kind, movie).await?))
}

pub async fn membership(
    State(state): State<Arc<AppState>>,
    Path((kind, movie_id)): Path<(ListKind, MovieId)>,
) -> AppResult<Json<ListMembership>> {
    Ok(Json(state.lists.membership(kind, movie_id).await?))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path((kind, movie_id)): Path<(ListKind, MovieId)>,
) -> AppResult<StatusCode> {
    state.lists.remove(kind, movie_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
