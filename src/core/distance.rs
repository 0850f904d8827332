use crate::models::{BoundingBox, Position};

/// Earth's radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two positions in kilometers
///
/// The atan2 form stays numerically stable for near-identical and
/// near-antipodal points. Total over numeric input: no validation is
/// performed, and NaN or out-of-range coordinates yield a defined but
/// meaningless number rather than an error.
///
/// # Arguments
/// * `a` - First position in decimal degrees
/// * `b` - Second position in decimal degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(a: Position, b: Position) -> f64 {
    let lat_a_rad = a.lat.to_radians();
    let lat_b_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a_rad.cos() * lat_b_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Calculate a bounding box around a center position
///
/// This is much faster than Haversine and is used only to pre-filter
/// the candidate fetch; it never decides inclusion.
/// 1° latitude ≈ 111km, 1° longitude ≈ 111km * cos(latitude)
///
/// # Arguments
/// * `center` - Center position in decimal degrees
/// * `radius_km` - Radius in kilometers
///
/// # Returns
/// BoundingBox with min/max lat/lng
pub fn calculate_bounding_box(center: Position, radius_km: f64) -> BoundingBox {
    // 1 degree latitude is approximately 111 km
    let lat_delta = radius_km / 111.0;

    // 1 degree longitude varies by latitude
    let lng_delta = radius_km / (111.0 * center.lat.to_radians().cos().abs());

    BoundingBox {
        min_lat: center.lat - lat_delta,
        max_lat: center.lat + lat_delta,
        min_lng: center.lng - lng_delta,
        max_lng: center.lng + lng_delta,
    }
}

/// Check if a position is within a bounding box
#[inline]
pub fn is_within_bounding_box(p: Position, bbox: &BoundingBox) -> bool {
    p.lat >= bbox.min_lat
        && p.lat <= bbox.max_lat
        && p.lng >= bbox.min_lng
        && p.lng <= bbox.max_lng
}
