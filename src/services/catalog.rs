// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Catalog loading service.
//!
//! The catalog is read once at startup and is immutable afterwards; request
//! handlers only ever borrow from it.

use crate::models::{Activity, CityMeta};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Minimum points the price-distribution series needs before the sparkline
/// generator can scale it horizontally.
const MIN_DISTRIBUTION_POINTS: usize = 2;

/// In-memory activity catalog plus the dataset-level descriptive fields.
#[derive(Debug, Default, Clone)]
pub struct CatalogService {
    activities: Vec<Activity>,
    cities: Vec<CityMeta>,
    region: String,
    price_distribution: Vec<f64>,
}

/// Wire format of the catalog data file.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    #[serde(default)]
    region: String,
    #[serde(default)]
    price_distribution: Vec<f64>,
    #[serde(default)]
    cities: Vec<CityMeta>,
    #[serde(default)]
    activities: Vec<Activity>,
}

impl CatalogService {
    /// Load the catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load the catalog from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(json_data).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        if file.price_distribution.len() < MIN_DISTRIBUTION_POINTS {
            return Err(CatalogError::ShortPriceDistribution(
                file.price_distribution.len(),
            ));
        }

        tracing::info!(
            activities = file.activities.len(),
            cities = file.cities.len(),
            region = %file.region,
            "Loaded catalog"
        );

        Ok(Self {
            activities: file.activities,
            cities: file.cities,
            region: file.region,
            price_distribution: file.price_distribution,
        })
    }

    /// The full activity list, in catalog order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// City metadata entries.
    pub fn cities(&self) -> &[CityMeta] {
        &self.cities
    }

    /// Descriptive region label for the dataset.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Fixed illustrative price distribution fed to the sparkline.
    pub fn price_distribution(&self) -> &[f64] {
        &self.price_distribution
    }
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse catalog: {0}")]
    ParseError(String),

    #[error("Price distribution needs at least 2 points, got {0}")]
    ShortPriceDistribution(usize),
}
