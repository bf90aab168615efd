// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! City metadata used to enrich aggregated stats.

use serde::{Deserialize, Serialize};

/// Optional per-city metadata carried in the catalog file.
///
/// Cities that appear in activities but have no metadata entry fall back
/// to an empty image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityMeta {
    pub name: String,
    #[serde(default)]
    pub img: String,
}
