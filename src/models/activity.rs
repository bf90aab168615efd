// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Bookable activity model for the catalog and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One bookable item in the activity catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    /// Opaque unique identifier (stable, never reused)
    pub id: String,
    /// Display name, also used for free-text matching
    pub name: String,
    pub price: Price,
    pub location: Location,
    pub reviews: Reviews,
    /// Tags such as "new"; order-irrelevant
    #[serde(default)]
    pub flags: Vec<String>,
    /// Category tags; membership tested, not order
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Price {
    /// Non-negative amount
    pub value: f64,
    /// ISO-4217-like code (e.g. "USD")
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Location {
    pub city: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Reviews {
    /// Absent when the activity has no ratings yet
    #[serde(default)]
    pub average_rating: Option<f64>,
    pub count: u32,
}

impl Activity {
    /// Whether the activity carries the "new" flag.
    pub fn is_new(&self) -> bool {
        self.flags.iter().any(|f| f == "new")
    }
}
