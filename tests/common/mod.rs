// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use spot_checkin::config::Config;
use spot_checkin::routes::create_router;
use spot_checkin::services::{CheckInVerifier, SpotCatalog};
use spot_checkin::AppState;
use std::sync::Arc;

/// Inline catalog for hermetic API tests; one spot with a hologram, one
/// without.
#[allow(dead_code)]
pub const TEST_CATALOG: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {
                "id": "grand-park-ledges",
                "name": "Grand Park Ledges",
                "hologram_url": "https://cdn.spotcheckin.app/holograms/grand-park-ledges.glb",
                "checkin_count": 193,
                "total_visitors": 160
            },
            "geometry": { "type": "Point", "coordinates": [-118.2437, 34.0522] }
        },
        {
            "type": "Feature",
            "properties": {
                "id": "stoner-plaza",
                "name": "Stoner Skate Plaza"
            },
            "geometry": { "type": "Point", "coordinates": [-118.4596, 34.0378] }
        }
    ]
}"#;

/// Create a test app over the inline catalog.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let catalog = SpotCatalog::load_from_json(TEST_CATALOG).expect("test catalog should parse");
    let verifier = CheckInVerifier::new(catalog);

    let state = Arc::new(AppState { config, verifier });

    (create_router(state.clone()), state)
}
