// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Check-in verification and grant issuance.

use crate::geo::haversine_distance_m;
use crate::models::access::{SpotAccess, ACCESS_TTL_MS};
use crate::services::SpotCatalog;
use crate::time_utils::{epoch_ms, format_epoch_ms_rfc3339};
use geo::point;
use sha2::{Digest, Sha256};

/// Acceptance radius for a check-in, in meters.
pub const CHECKIN_RADIUS_M: f64 = 30.0;

/// Outcome of a check-in attempt against a known spot.
///
/// `TooFar` is an expected negative outcome carrying diagnostic distance
/// data, not an error.
#[derive(Debug, Clone)]
pub enum CheckInDecision {
    Granted {
        access: SpotAccess,
        /// Measured distance in meters, rounded to the nearest meter
        distance_m: f64,
        message: String,
    },
    TooFar {
        distance_m: f64,
        message: String,
    },
}

/// Errors from check-in verification.
#[derive(Debug, thiserror::Error)]
pub enum CheckInError {
    #[error("Spot not found: {0}")]
    UnknownSpot(String),
}

/// Stateless verifier deciding check-ins against the spot catalog.
#[derive(Default, Clone)]
pub struct CheckInVerifier {
    catalog: SpotCatalog,
}

impl CheckInVerifier {
    pub fn new(catalog: SpotCatalog) -> Self {
        Self { catalog }
    }

    /// The spot catalog this verifier decides against.
    pub fn catalog(&self) -> &SpotCatalog {
        &self.catalog
    }

    /// Verify a claimed position against a spot and issue a grant if it
    /// is within [`CHECKIN_RADIUS_M`].
    ///
    /// Coordinates are decimal degrees, already range-validated at the
    /// API boundary. Grants are not persisted server-side; the caller
    /// hands them to the client's access store.
    pub fn check_in(
        &self,
        spot_id: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<CheckInDecision, CheckInError> {
        self.check_in_at(spot_id, latitude, longitude, epoch_ms())
    }

    /// Like [`check_in`](Self::check_in) with an explicit decision time.
    pub fn check_in_at(
        &self,
        spot_id: &str,
        latitude: f64,
        longitude: f64,
        now_ms: i64,
    ) -> Result<CheckInDecision, CheckInError> {
        let spot = self
            .catalog
            .get(spot_id)
            .ok_or_else(|| CheckInError::UnknownSpot(spot_id.to_string()))?;

        let claimed = point!(x: longitude, y: latitude);
        let exact_distance = haversine_distance_m(claimed, spot.location);
        // The comparison uses the exact distance; rounding is only for display.
        let distance_m = exact_distance.round();

        if exact_distance > CHECKIN_RADIUS_M {
            tracing::debug!(
                spot_id,
                distance_m,
                "Check-in rejected: outside acceptance radius"
            );
            return Ok(CheckInDecision::TooFar {
                distance_m,
                message: format!(
                    "Too far from {}: you are {distance_m:.0}m away, but check-in requires \
                     being within {CHECKIN_RADIUS_M:.0}m",
                    spot.name
                ),
            });
        }

        let access = SpotAccess {
            spot_id: spot.id.clone(),
            access_granted_at: now_ms,
            expires_at: now_ms + ACCESS_TTL_MS,
            trick_id: Some(derive_trick_id(&spot.id, now_ms)),
            hologram_url: spot.hologram_url.clone(),
        };

        tracing::info!(
            spot_id,
            distance_m,
            expires_at = access.expires_at,
            "Check-in granted"
        );

        Ok(CheckInDecision::Granted {
            message: format!(
                "Checked in at {}! Access unlocked until {}",
                spot.name,
                format_epoch_ms_rfc3339(access.expires_at)
            ),
            access,
            distance_m,
        })
    }
}

/// Deterministic trick id for a grant: truncated SHA-256 of the spot id
/// and the grant timestamp.
fn derive_trick_id(spot_id: &str, granted_at_ms: i64) -> String {
    let digest = Sha256::digest(format!("{spot_id}:{granted_at_ms}"));
    format!("trick-{}", &hex::encode(digest)[..12])
}
