use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    middleware::request_id::RequestId,
    models::{GenreId, MovieSummary},
    routes::AppState,
    services::discovery::{DiscoveryCoordinator, DiscoveryState, DisplayMode},
};

#[derive(Debug, Deserialize)]
pub struct TextChangedRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct GenreTappedRequest {
    pub genre_id: GenreId,
}

/// Observable discovery state as sent to clients
#[derive(Debug, Serialize)]
pub struct DiscoveryResponse {
    pub session: u64,
    pub mode: DisplayMode,
    pub text: String,
    /// `null` means Recommended
    pub selected_genre_id: Option<GenreId>,
    pub is_searching: bool,
    /// A debounced search has not fired yet
    pub search_pending: bool,
    pub results: Vec<MovieSummary>,
    pub is_loading: bool,
    pub last_fetch_failed: bool,
}

impl DiscoveryResponse {
    fn new(state: DiscoveryState, search_pending: bool) -> Self {
        Self {
            selected_genre_id: state.selected_genre_id(),
            is_searching: state.is_searching(),
            search_pending,
            session: state.session,
            mode: state.mode,
            text: state.text,
            results: state.results,
            is_loading: state.is_loading,
            last_fetch_failed: state.last_fetch_failed,
        }
    }
}

impl From<&DiscoveryCoordinator> for DiscoveryResponse {
    fn from(discovery: &DiscoveryCoordinator) -> Self {
        Self::new(discovery.snapshot(), discovery.search_pending())
    }
}

/// Current discovery snapshot
pub async fn current(State(state): State<Arc<AppState>>) -> Json<DiscoveryResponse> {
    Json((&state.discovery).into())
}

/// Handler for free-text edits
pub async fn text_changed(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<TextChangedRequest>,
) -> Json<DiscoveryResponse> {
    tracing::info!(
        request_id = %request_id,
        chars = request.text.chars().count(),
        "Text changed"
    );

    state.discovery.set_free_text(request.text);
    Json((&state.discovery).into())
}

/// Handler for genre chip taps
pub async fn genre_tapped(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<GenreTappedRequest>,
) -> Json<DiscoveryResponse> {
    tracing::info!(
        request_id = %request_id,
        genre_id = request.genre_id,
        "Genre tapped"
    );

    state.discovery.select_genre(request.genre_id);
    Json((&state.discovery).into())
}
