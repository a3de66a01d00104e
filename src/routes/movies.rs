use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{MovieDetails, MovieId},
    routes::AppState,
    services::{
        home_feed::{load_home_feed, HomeFeed},
        movie_details::load_movie_details,
    },
};

/// Handler for the home feed
pub async fn feed(State(state): State<Arc<AppState>>) -> AppResult<Json<HomeFeed>> {
    let feed = load_home_feed(state.provider.as_ref()).await?;
    Ok(Json(feed))
}

/// Handler for a single movie
pub async fn details(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<MovieId>,
) -> AppResult<Json<MovieDetails>> {
    let details = load_movie_details(state.provider.as_ref(), movie_id).await?;
    Ok(Json(details))
}
