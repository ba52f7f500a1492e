//! Straight-line travel estimates between consecutive stops.
//!
//! Distances are great-circle (haversine), not road distances; the
//! time estimate is a simple distance / speed conversion. Good enough
//! for ordering a day of visits, not for turn-by-turn navigation.

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 coordinate pair in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Great-circle distance between two points, in kilometers
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Converts a distance into an estimated driving time in minutes,
/// assuming a constant average speed in km/h
pub fn travel_minutes(distance_km: f64, assumed_speed_kmh: f64) -> f64 {
    distance_km / assumed_speed_kmh * 60.0
}

/// Rounds a distance for output (two decimals, ~10 m resolution)
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

/// Rounds a travel time to whole minutes for output
pub fn round_minutes(minutes: f64) -> f64 {
    minutes.round()
}
