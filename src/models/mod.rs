// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod city;
pub mod stats;

pub use activity::{Activity, Location, Price, Reviews};
pub use city::CityMeta;
pub use stats::{PriceGraph, SearchStats};
