// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Skate spot model.

use geo::Point;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A skate spot with its true location.
///
/// The visit counters are read-only reference data from the catalog; the
/// check-in flow never increments them.
#[derive(Debug, Clone)]
pub struct Spot {
    /// Stable spot identifier (e.g., "venice-beach-park")
    pub id: String,
    /// Display name (e.g., "Venice Beach Skatepark")
    pub name: String,
    /// True location, ground truth for distance checks.
    /// GeoJSON axis order: x = longitude, y = latitude.
    pub location: Point<f64>,
    /// AR hologram asset for this spot, if one exists
    pub hologram_url: Option<String>,
    /// Historical check-in count from the catalog
    pub checkin_count: u32,
    /// Historical unique visitor count from the catalog
    pub total_visitors: u32,
}

/// Summary of a spot for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SpotSummary {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub hologram_url: Option<String>,
    pub checkin_count: u32,
    pub total_visitors: u32,
}

impl From<&Spot> for SpotSummary {
    fn from(spot: &Spot) -> Self {
        Self {
            id: spot.id.clone(),
            name: spot.name.clone(),
            lat: spot.location.y(),
            lng: spot.location.x(),
            hologram_url: spot.hologram_url.clone(),
            checkin_count: spot.checkin_count,
            total_visitors: spot.total_visitors,
        }
    }
}
