use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to find chefs whose service radius covers the user
///
/// Coordinates are optional: when the client could not resolve a
/// location, the service substitutes the configured fallback position.
/// No range validation is applied to lat/lng; out-of-range values give
/// mathematically defined but meaningless distances.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbyChefsRequest {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default = "default_limit")]
    pub limit: u16,
    #[serde(default)]
    pub specialty: Option<String>,
    #[validate(range(min = 1, max = 4))]
    #[serde(default)]
    #[serde(alias = "max_price_level", rename = "maxPriceLevel")]
    pub max_price_level: Option<u8>,
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(default)]
    #[serde(alias = "min_rating", rename = "minRating")]
    pub min_rating: Option<f64>,
    #[serde(default)]
    #[serde(alias = "order_by_distance", rename = "orderByDistance")]
    pub order_by_distance: bool,
}

fn default_limit() -> u16 {
    20
}
