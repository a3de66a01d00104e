use std::sync::Arc;

use movie_discovery::{
    config::Config,
    routes::{create_router, AppState},
    services::{
        providers::{CatalogProvider, TmdbProvider},
        DiscoveryCoordinator, PersonalLists,
    },
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movie_discovery=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let provider: Arc<dyn CatalogProvider> = Arc::new(TmdbProvider::from_config(&config)?);
    let discovery = DiscoveryCoordinator::start(provider.clone(), config.discovery_settings());

    let lists = PersonalLists::in_memory();

    let state = Arc::new(AppState::new(provider, discovery, lists));
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
