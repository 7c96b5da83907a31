// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Check-in route: verify a claimed position and issue a grant.

use crate::error::{AppError, Result};
use crate::models::SpotAccess;
use crate::services::{CheckInDecision, CheckInError};
use crate::AppState;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Check-in routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/check-in", post(check_in))
}

/// Check-in request body.
///
/// `user_id` is client-supplied and not bound to a session; see the
/// trust-gap note in DESIGN.md.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    #[validate(length(min = 1, message = "spotId must not be empty"))]
    pub spot_id: String,
    #[validate(length(min = 1, message = "userId must not be empty"))]
    pub user_id: String,
    #[validate(range(min = -90.0, max = 90.0, message = "latitude out of range"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "longitude out of range"))]
    pub longitude: f64,
}

/// Successful check-in response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CheckInResponse {
    pub success: bool,
    pub message: String,
    pub access: SpotAccess,
    /// Measured distance in meters, rounded
    pub distance: f64,
}

/// Check-in rejection: the claimed position is outside the acceptance
/// radius. Returned with HTTP 403, carrying the measured distance so the
/// user can move closer.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CheckInRejection {
    pub success: bool,
    pub message: String,
    pub distance: f64,
}

/// Handle a check-in attempt.
async fn check_in(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckInRequest>,
) -> Result<Response> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    tracing::debug!(
        spot_id = %req.spot_id,
        user_id = %req.user_id,
        "Check-in attempt"
    );

    let decision = state
        .verifier
        .check_in(&req.spot_id, req.latitude, req.longitude)
        .map_err(|e| match e {
            CheckInError::UnknownSpot(id) => AppError::NotFound(format!("Spot {id} not found")),
        })?;

    let response = match decision {
        CheckInDecision::Granted {
            access,
            distance_m,
            message,
        } => (
            StatusCode::OK,
            Json(CheckInResponse {
                success: true,
                message,
                access,
                distance: distance_m,
            }),
        )
            .into_response(),
        CheckInDecision::TooFar {
            distance_m,
            message,
        } => (
            StatusCode::FORBIDDEN,
            Json(CheckInRejection {
                success: false,
                message,
                distance: distance_m,
            }),
        )
            .into_response(),
    };

    Ok(response)
}
