use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Chef profile as stored in the Supabase `chefs` table
///
/// Column names are snake_case, so the PostgREST rows deserialize
/// without renames. Location and radius are nullable in the schema;
/// chefs without them are never matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChefProfile {
    pub id: String,
    pub specialty: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    pub price_level: u8,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub total_reviews: Option<i64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub service_radius_km: Option<f64>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl ChefProfile {
    /// Helper to get is_active as a bool, defaulting to false
    pub fn active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }

    /// Base location, if both coordinates are present
    pub fn position(&self) -> Option<Position> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Position::new(lat, lng)),
            _ => None,
        }
    }
}

/// A chef whose service radius covers the user, annotated with the
/// computed great-circle distance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyChef {
    #[serde(rename = "chefId")]
    pub chef_id: String,
    pub specialty: String,
    pub bio: Option<String>,
    pub city: Option<String>,
    #[serde(rename = "priceLevel")]
    pub price_level: u8,
    pub rating: Option<f64>,
    #[serde(rename = "totalReviews")]
    pub total_reviews: Option<i64>,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "serviceRadiusKm")]
    pub service_radius_km: f64,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

/// Optional discovery filters applied before proximity matching
///
/// Absent filters match everything.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryFilters {
    pub specialty: Option<String>,
    pub max_price_level: Option<u8>,
    pub min_rating: Option<f64>,
}
