// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Spot catalog routes.

use crate::error::{AppError, Result};
use crate::models::SpotSummary;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Spot catalog routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/spots", get(list_spots))
        .route("/spots/{id}", get(get_spot))
}

/// Spot list response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SpotsResponse {
    pub spots: Vec<SpotSummary>,
    pub total: u32,
}

/// List the full spot catalog (for the client map).
async fn list_spots(State(state): State<Arc<AppState>>) -> Json<SpotsResponse> {
    let spots: Vec<SpotSummary> = state
        .verifier
        .catalog()
        .spots()
        .iter()
        .map(SpotSummary::from)
        .collect();

    Json(SpotsResponse {
        total: spots.len() as u32,
        spots,
    })
}

/// Look up one spot by id.
async fn get_spot(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SpotSummary>> {
    let spot = state
        .verifier
        .catalog()
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Spot {id} not found")))?;

    Ok(Json(SpotSummary::from(spot)))
}
