// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Great-circle distance between two points.

use geo::Point;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance in meters between two points.
///
/// Points use GeoJSON axis order: `x` is longitude, `y` is latitude, in
/// decimal degrees.
pub fn haversine_distance_m(a: Point<f64>, b: Point<f64>) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let dlat = (b.y() - a.y()).to_radians();
    let dlng = (b.x() - a.x()).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::point;

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = point!(x: -118.2437, y: 34.0522);
        assert_eq!(haversine_distance_m(p, p), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = point!(x: -118.2437, y: 34.0522);
        let b = point!(x: -118.4912, y: 34.0195);
        assert_eq!(haversine_distance_m(a, b), haversine_distance_m(b, a));
    }

    #[test]
    fn test_equator_millidegree_fixture() {
        // 0.001° of latitude at the equator is ~111 meters; this pins down
        // both the formula and the Earth radius constant.
        let a = point!(x: 0.0, y: 0.0);
        let b = point!(x: 0.0, y: 0.001);
        let d = haversine_distance_m(a, b);
        assert!((d - 111.0).abs() <= 1.0, "expected ~111m, got {d}");
    }

    #[test]
    fn test_known_city_pair() {
        // Downtown LA to Venice Beach is roughly 23 km.
        let dtla = point!(x: -118.2437, y: 34.0522);
        let venice = point!(x: -118.4695, y: 33.9850);
        let d = haversine_distance_m(dtla, venice);
        assert!(
            (21_000.0..24_000.0).contains(&d),
            "expected ~23km, got {d}"
        );
    }
}
