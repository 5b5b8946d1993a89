//! Sneha Sliding — marketing site with an embedded admin panel

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snehasite::{
    config::{Config, StoreDriver},
    store::create_store,
    web::{build_router, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snehasite=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sneha Sliding site...");

    // Load configuration
    #[allow(unused_mut)]
    let mut config = Config::load_with_env(Path::new("config.yml"))?;
    tracing::info!("Configuration loaded");

    // Demo mode: run against the in-process store with seeded posts
    #[cfg(feature = "demo")]
    {
        tracing::info!("Demo mode: using the in-process store");
        config.store.driver = StoreDriver::Memory;
    }

    // Wire up the content store
    let store = create_store(&config.store, &config.upload)?;
    match config.store.driver {
        StoreDriver::Rest => tracing::info!("Content store: {}", config.store.url),
        StoreDriver::Memory => tracing::info!(
            "Content store: in-process (uploads in {:?})",
            config.upload.path
        ),
    }

    // Build application state and router
    let state = AppState::new(store, &config)?;
    let app = build_router(state);

    // Start the server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
