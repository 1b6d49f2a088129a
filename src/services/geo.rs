//! Geographic calculations

use crate::types::Coordinates;

/// Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate Haversine distance between two points in kilometers
pub fn haversine_distance(from: &Coordinates, to: &Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lng - from.lng).to_radians();

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Total path length of depot -> stops[0] -> ... -> stops[n-1] in kilometers.
///
/// Legs are summed left to right, so extending a path by one stop adds
/// exactly one leg to the previous total.
pub fn route_distance(depot: &Coordinates, stops: &[Coordinates]) -> f64 {
    let mut total = 0.0;
    let mut current = depot;

    for stop in stops {
        total += haversine_distance(current, stop);
        current = stop;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hassan() -> Coordinates {
        Coordinates { lat: 13.0072, lng: 76.0962 }
    }

    fn bengaluru() -> Coordinates {
        Coordinates { lat: 12.9716, lng: 77.5946 }
    }

    #[test]
    fn test_haversine_hassan_bengaluru() {
        let distance = haversine_distance(&hassan(), &bengaluru());

        // Hassan to Bengaluru is approximately 162 km
        assert!((distance - 162.0).abs() < 5.0);
    }

    #[test]
    fn test_haversine_same_point() {
        let point = Coordinates { lat: 13.0, lng: 76.0 };
        let distance = haversine_distance(&point, &point);
        assert!((distance - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = hassan();
        let b = bengaluru();
        assert_eq!(haversine_distance(&a, &b), haversine_distance(&b, &a));
    }

    #[test]
    fn test_route_distance_empty() {
        assert_eq!(route_distance(&hassan(), &[]), 0.0);
    }

    #[test]
    fn test_route_distance_single_stop() {
        let stop = Coordinates { lat: 13.05, lng: 76.12 };
        let route = route_distance(&hassan(), &[stop]);
        assert_eq!(route, haversine_distance(&hassan(), &stop));
    }

    #[test]
    fn test_route_distance_sums_legs() {
        let a = Coordinates { lat: 13.05, lng: 76.12 };
        let b = Coordinates { lat: 13.10, lng: 76.20 };
        let depot = hassan();

        let expected =
            haversine_distance(&depot, &a) + haversine_distance(&a, &b);
        assert_eq!(route_distance(&depot, &[a, b]), expected);
    }

    #[test]
    fn test_extending_path_adds_one_leg() {
        let depot = hassan();
        let stops = [
            Coordinates { lat: 13.05, lng: 76.12 },
            Coordinates { lat: 12.98, lng: 76.05 },
            Coordinates { lat: 13.11, lng: 76.22 },
        ];

        let shorter = route_distance(&depot, &stops[..2]);
        let last_leg = haversine_distance(&stops[1], &stops[2]);
        assert_eq!(route_distance(&depot, &stops), shorter + last_leg);
    }
}
