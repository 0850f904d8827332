use serde::{Deserialize, Serialize};
use crate::models::domain::{NearbyChef, Position};

/// Response for the nearby chefs endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyChefsResponse {
    pub chefs: Vec<NearbyChef>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    pub position: Position,
    #[serde(rename = "usedFallback")]
    pub used_fallback: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
