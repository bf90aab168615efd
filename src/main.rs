// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Travel-Search API Server
//!
//! Serves the activity search endpoint: filters and sorts the in-memory
//! catalog per request and returns aggregate stats alongside the results.

use std::sync::Arc;
use travel_search::{config::Config, services::CatalogService, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Travel-Search API");

    // Load the activity catalog
    tracing::info!(path = %config.catalog_path, "Loading activity catalog");
    let catalog = CatalogService::load_from_file(&config.catalog_path)?;

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        catalog,
    });

    // Build router
    let app = travel_search::routes::create_router(state);

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
                .add_directive("travel_search=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
