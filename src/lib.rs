// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Travel-Search: activity search API for the travel demo frontend
//!
//! This crate provides the backend API that filters, sorts, and aggregates
//! the activity catalog per request and renders the price-distribution
//! sparkline path.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::CatalogService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub catalog: CatalogService,
}
