// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Spot-Checkin API Server
//!
//! Verifies geolocation-gated check-ins at skate spots and issues
//! time-boxed access grants for spot-specific AR content.

use spot_checkin::{
    config::Config,
    services::{CheckInVerifier, SpotCatalog},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Spot-Checkin API");

    // Load the spot catalog
    tracing::info!(path = %config.spots_path, "Loading spot catalog");
    let catalog =
        SpotCatalog::load_from_file(&config.spots_path).expect("Failed to load spot catalog");
    tracing::info!(count = catalog.spots().len(), "Spot catalog loaded");

    let verifier = CheckInVerifier::new(catalog);

    // Build shared state
    let state = Arc::new(AppState { config, verifier });

    // Build router
    let app = spot_checkin::routes::create_router(state.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spot_checkin=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
