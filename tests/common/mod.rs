// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Arc;
use travel_search::config::Config;
use travel_search::routes::create_router;
use travel_search::services::CatalogService;
use travel_search::AppState;

/// Create a test app serving the bundled reference catalog.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let catalog = CatalogService::load_from_file("data/activities.json")
        .expect("Failed to load reference catalog");

    let state = Arc::new(AppState { config, catalog });

    (create_router(state.clone()), state)
}
