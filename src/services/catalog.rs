// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Spot catalog loading and lookup.

use crate::models::Spot;
use geo::Point;
use geojson::GeoJson;
use std::fs;
use std::path::Path;

/// Read-only catalog of skate spots, the ground truth for check-ins.
#[derive(Default, Clone)]
pub struct SpotCatalog {
    spots: Vec<Spot>,
}

impl SpotCatalog {
    /// Load spots from a GeoJSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load spots from a GeoJSON string.
    ///
    /// Features without an `id` or `name` property are skipped with a
    /// warning rather than failing the whole catalog.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let geojson: GeoJson = json_data
            .parse()
            .map_err(|e: geojson::Error| CatalogError::ParseError(e.to_string()))?;

        let mut spots = Vec::new();

        if let GeoJson::FeatureCollection(collection) = geojson {
            for feature in collection.features {
                let id = feature.property("id").and_then(|v| v.as_str());
                let name = feature.property("name").and_then(|v| v.as_str());

                let (Some(id), Some(name)) = (id, name) else {
                    tracing::warn!("Skipping spot feature without id/name");
                    continue;
                };
                let id = id.to_string();
                let name = name.to_string();

                let hologram_url = feature
                    .property("hologram_url")
                    .and_then(|v| v.as_str())
                    .map(str::to_string);

                let checkin_count = feature
                    .property("checkin_count")
                    .and_then(|v| v.as_u64())
                    .unwrap_or(0) as u32;

                let total_visitors = feature
                    .property("total_visitors")
                    .and_then(|v| v.as_u64())
                    .unwrap_or(0) as u32;

                if let Some(geom) = feature.geometry {
                    let location = Self::convert_geometry(geom.value)?;
                    spots.push(Spot {
                        id,
                        name,
                        location,
                        hologram_url,
                        checkin_count,
                        total_visitors,
                    });
                }
            }
        }

        tracing::info!(count = spots.len(), "Loaded spots");
        Ok(Self { spots })
    }

    /// Convert GeoJSON geometry to a point location.
    fn convert_geometry(value: geojson::Value) -> Result<Point<f64>, CatalogError> {
        use std::convert::TryInto;

        let point_result: Result<Point<f64>, _> = value.try_into();
        point_result.map_err(|_| CatalogError::UnsupportedGeometry)
    }

    /// Get the list of spots.
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Look up one spot by id.
    pub fn get(&self, spot_id: &str) -> Option<&Spot> {
        self.spots.iter().find(|s| s.id == spot_id)
    }
}

/// Errors from catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse GeoJSON: {0}")]
    ParseError(String),

    #[error("Unsupported geometry type (expected Point)")]
    UnsupportedGeometry,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "id": "dtla-plaza",
                    "name": "Downtown Plaza",
                    "hologram_url": "https://cdn.example.com/holograms/dtla.glb",
                    "checkin_count": 42,
                    "total_visitors": 17
                },
                "geometry": { "type": "Point", "coordinates": [-118.2437, 34.0522] }
            },
            {
                "type": "Feature",
                "properties": { "name": "No Id Spot" },
                "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }
            },
            {
                "type": "Feature",
                "properties": { "id": "bare-spot", "name": "Bare Spot" },
                "geometry": { "type": "Point", "coordinates": [-118.4912, 34.0195] }
            }
        ]
    }"#;

    #[test]
    fn test_load_skips_features_without_id() {
        let catalog = SpotCatalog::load_from_json(CATALOG_JSON).unwrap();
        assert_eq!(catalog.spots().len(), 2);
        assert!(catalog.get("dtla-plaza").is_some());
        assert!(catalog.get("bare-spot").is_some());
    }

    #[test]
    fn test_loaded_spot_fields() {
        let catalog = SpotCatalog::load_from_json(CATALOG_JSON).unwrap();
        let spot = catalog.get("dtla-plaza").unwrap();

        assert_eq!(spot.name, "Downtown Plaza");
        assert_eq!(spot.location.x(), -118.2437);
        assert_eq!(spot.location.y(), 34.0522);
        assert_eq!(spot.checkin_count, 42);
        assert_eq!(spot.total_visitors, 17);
        assert!(spot.hologram_url.as_deref().unwrap().contains("dtla"));

        let bare = catalog.get("bare-spot").unwrap();
        assert_eq!(bare.hologram_url, None);
        assert_eq!(bare.checkin_count, 0);
    }

    #[test]
    fn test_unknown_spot_lookup() {
        let catalog = SpotCatalog::load_from_json(CATALOG_JSON).unwrap();
        assert!(catalog.get("nowhere").is_none());
    }

    #[test]
    fn test_rejects_non_point_geometry() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "id": "poly", "name": "Polygon Spot" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                }
            }]
        }"#;

        let result = SpotCatalog::load_from_json(json);
        assert!(matches!(result, Err(CatalogError::UnsupportedGeometry)));
    }

    #[test]
    fn test_invalid_json_error() {
        assert!(matches!(
            SpotCatalog::load_from_json("not geojson"),
            Err(CatalogError::ParseError(_))
        ));
    }
}
