// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity search route.

use crate::error::{AppError, Result};
use crate::models::{Activity, SearchStats};
use crate::services::search::{filter_activities, sort_activities, SearchQuery};
use crate::services::sparkline;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use axum_extra::extract::Query;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Dimensions of the rendered price-distribution sparkline. Which series is
/// fed into the generator is this route's policy; the generator itself takes
/// any series.
const GRAPH_WIDTH: f64 = 800.0;
const GRAPH_HEIGHT: f64 = 100.0;

const MAX_FREE_TEXT_BYTES: usize = 200;

/// Search routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/search", get(search))
}

/// Raw query parameters as sent by the frontend.
///
/// Repeated keys (`?city=A&city=B`) collect into vectors; everything is
/// optional. `maxPrice` arrives as a string so malformed numbers can be
/// absorbed by normalization instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    city: Vec<String>,
    max_price: Option<String>,
    #[serde(default)]
    types: Vec<String>,
    /// Deprecated parameter name kept for older frontends
    #[serde(default, rename = "type")]
    legacy_types: Vec<String>,
    /// Free-text name search
    query: Option<String>,
    sort: Option<String>,
}

/// Search response envelope. The single-element `data` list is part of the
/// consumer contract.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SearchResponse {
    pub data: Vec<SearchResult>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SearchResult {
    pub stats: SearchStats,
    pub results: Vec<Activity>,
}

/// Filter, sort, and aggregate the catalog for one request.
async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    if params
        .query
        .as_deref()
        .is_some_and(|q| q.len() > MAX_FREE_TEXT_BYTES)
    {
        return Err(AppError::BadRequest(format!(
            "Free-text query must be at most {} bytes",
            MAX_FREE_TEXT_BYTES
        )));
    }

    tracing::debug!(
        cities = ?params.city,
        max_price = ?params.max_price,
        types = ?params.types,
        free_text = ?params.query,
        sort = ?params.sort,
        "Searching activities"
    );

    let query = SearchQuery::normalize(
        params.city,
        params.max_price.as_deref(),
        params.types,
        params.legacy_types,
        params.query.as_deref(),
        params.sort.as_deref(),
    );

    let catalog = &state.catalog;

    let mut results = filter_activities(catalog.activities(), &query);
    sort_activities(&mut results, query.sort);

    let graph = sparkline::generate_path(catalog.price_distribution(), GRAPH_WIDTH, GRAPH_HEIGHT)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Price graph error: {}", e)))?;

    let stats = SearchStats::compute(
        catalog.activities(),
        catalog.cities(),
        &results,
        &query.cities,
        graph,
        catalog.region(),
    );

    Ok(Json(SearchResponse {
        data: vec![SearchResult { stats, results }],
    }))
}
