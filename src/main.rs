// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! F1 Explorer API Server
//!
//! Serves the driver/constructor catalog, search and favorites as JSON.

use f1_explorer::{
    config::Config,
    services::{Catalog, FavoritesStore},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting F1 Explorer API");

    // Load the driver/constructor dataset
    tracing::info!(path = %config.data_path.display(), "Loading catalog");
    let catalog = Catalog::load_from_file(&config.data_path)?;
    tracing::info!(
        drivers = catalog.drivers().len(),
        constructors = catalog.constructors().len(),
        season = catalog.season().unwrap_or("unknown"),
        "Catalog loaded"
    );

    let favorites = FavoritesStore::new(config.favorites_path.clone());
    tracing::info!(path = %favorites.path().display(), "Favorites store initialized");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        catalog,
        favorites,
    });

    // Build router
    let app = f1_explorer::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("f1_explorer=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
