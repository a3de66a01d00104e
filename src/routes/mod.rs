use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    middleware::request_id::{request_id_middleware, request_span},
    services::{providers::CatalogProvider, DiscoveryCoordinator, PersonalLists},
};

pub mod discover;
pub mod genres;
pub mod lists;
pub mod movies;

/// Shared application state
///
/// The service hosts a single user: one discovery screen and one set of personal lists
/// shared by every client.
pub struct AppState {
    pub provider: Arc<dyn CatalogProvider>,
    pub discovery: DiscoveryCoordinator,
    pub lists: PersonalLists,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn CatalogProvider>,
        discovery: DiscoveryCoordinator,
        lists: PersonalLists,
    ) -> Self {
        Self {
            provider,
            discovery,
            lists,
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/discover", get(discover::current))
        .route("/discover/text", post(discover::text_changed))
        .route("/discover/genre", post(discover::genre_tapped))
        .route("/genres", get(genres::list))
        .route("/movies/feed", get(movies::feed))
        .route("/movies/:id", get(movies::details))
        .route("/lists/:kind", get(lists::list).post(lists::toggle))
        .route("/lists/:kind/:id", get(lists::membership).delete(lists::remove))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
