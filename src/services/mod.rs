// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod catalog;
pub mod search;
pub mod sparkline;

pub use catalog::{CatalogError, CatalogService};
pub use search::{SearchQuery, SortKey};
pub use sparkline::SparklineError;
