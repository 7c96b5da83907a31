// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Spot-Checkin: geolocation-gated check-ins at skate spots.
//!
//! This crate provides the backend API that verifies claimed positions
//! against the spot catalog and issues time-boxed access grants, plus the
//! client-side access store that caches those grants.

pub mod config;
pub mod error;
pub mod geo;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use services::CheckInVerifier;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub verifier: CheckInVerifier,
}
