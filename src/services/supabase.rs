use crate::models::{BoundingBox, ChefProfile};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with Supabase
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Columns the discovery path reads from the `chefs` table
const CHEF_COLUMNS: &str =
    "id,specialty,bio,city,price_level,rating,total_reviews,lat,lng,service_radius_km,is_active,created_at";

const CHEFS_TABLE: &str = "chefs";

/// Supabase REST (PostgREST) client
///
/// Handles all communication with the platform's backend, which owns
/// persistence and row-level authorization:
/// - Querying candidate chef profiles
/// - Fetching a single chef profile
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            table
        )
    }

    /// Query active chef profiles, optionally restricted to a bounding box
    ///
    /// The bounding box is a fetch-side pre-filter around the user
    /// position; the matcher re-checks the exact geodesic radius for
    /// every candidate. Rows are ordered by creation time so the
    /// caller sees a stable source order.
    pub async fn list_active_chefs(
        &self,
        bbox: Option<&BoundingBox>,
        limit: usize,
    ) -> Result<Vec<ChefProfile>, SupabaseError> {
        let url = self.table_url(CHEFS_TABLE);

        let mut params: Vec<(String, String)> = vec![
            ("select".to_string(), CHEF_COLUMNS.to_string()),
            ("is_active".to_string(), "eq.true".to_string()),
            ("order".to_string(), "created_at.asc".to_string()),
            ("limit".to_string(), limit.to_string()),
        ];

        if let Some(bbox) = bbox {
            params.push(("lat".to_string(), format!("gte.{}", bbox.min_lat)));
            params.push(("lat".to_string(), format!("lte.{}", bbox.max_lat)));
            params.push(("lng".to_string(), format!("gte.{}", bbox.min_lng)));
            params.push(("lng".to_string(), format!("lte.{}", bbox.max_lng)));
        }

        let response = self
            .client
            .get(&url)
            .query(&params)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(SupabaseError::Unauthorized);
        }
        if !status.is_success() {
            return Err(SupabaseError::ApiError(format!(
                "Failed to query chefs: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        let rows = json
            .as_array()
            .ok_or_else(|| SupabaseError::InvalidResponse("Expected a JSON array of rows".into()))?;

        // Tolerant row parsing: a malformed row is skipped, not fatal
        let chefs: Vec<ChefProfile> = rows
            .iter()
            .filter_map(|row| serde_json::from_value(row.clone()).ok())
            .collect();

        tracing::debug!("Queried {} chef profiles (rows: {})", chefs.len(), rows.len());

        Ok(chefs)
    }

    /// Get a single chef profile by ID
    pub async fn get_chef(&self, chef_id: &str) -> Result<ChefProfile, SupabaseError> {
        let url = format!(
            "{}?select={}&id=eq.{}&limit=1",
            self.table_url(CHEFS_TABLE),
            CHEF_COLUMNS,
            urlencoding::encode(chef_id)
        );

        tracing::debug!("Fetching chef profile: {}", chef_id);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(SupabaseError::Unauthorized);
        }
        if !status.is_success() {
            return Err(SupabaseError::ApiError(format!(
                "Failed to fetch chef: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        let rows = json
            .as_array()
            .ok_or_else(|| SupabaseError::InvalidResponse("Expected a JSON array of rows".into()))?;

        let row = rows
            .first()
            .ok_or_else(|| SupabaseError::NotFound(format!("Chef {} not found", chef_id)))?;

        serde_json::from_value(row.clone())
            .map_err(|e| SupabaseError::InvalidResponse(format!("Failed to parse chef: {}", e)))
    }

    /// Health check: a minimal read against the chefs table
    pub async fn health_check(&self) -> Result<bool, SupabaseError> {
        let url = format!("{}?select=id&limit=1", self.table_url(CHEFS_TABLE));

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chef_row(id: &str, lat: f64, lng: f64, radius: f64) -> Value {
        serde_json::json!({
            "id": id,
            "specialty": "Culinária Italiana",
            "bio": null,
            "city": "São Paulo",
            "price_level": 2,
            "rating": 4.9,
            "total_reviews": 21,
            "lat": lat,
            "lng": lng,
            "service_radius_km": radius,
            "is_active": true,
            "created_at": "2025-04-01T12:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_list_active_chefs_parses_rows() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!([
            chef_row("chef-1", -23.5489, -46.6388, 15.0),
            chef_row("chef-2", -23.5505, -46.6333, 10.0),
        ]);

        let mock = server
            .mock("GET", "/rest/v1/chefs")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = SupabaseClient::new(server.url(), "test_key".to_string());
        let chefs = client.list_active_chefs(None, 50).await.unwrap();

        mock.assert_async().await;
        assert_eq!(chefs.len(), 2);
        assert_eq!(chefs[0].id, "chef-1");
        assert_eq!(chefs[1].service_radius_km, Some(10.0));
    }

    #[tokio::test]
    async fn test_list_active_chefs_skips_malformed_rows() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!([
            chef_row("chef-1", -23.5489, -46.6388, 15.0),
            { "id": "broken" },
        ]);

        let _mock = server
            .mock("GET", "/rest/v1/chefs")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = SupabaseClient::new(server.url(), "test_key".to_string());
        let chefs = client.list_active_chefs(None, 50).await.unwrap();

        assert_eq!(chefs.len(), 1);
        assert_eq!(chefs[0].id, "chef-1");
    }

    #[tokio::test]
    async fn test_get_chef_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/rest/v1/chefs")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = SupabaseClient::new(server.url(), "test_key".to_string());
        let result = client.get_chef("missing").await;

        assert!(matches!(result, Err(SupabaseError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unauthorized_status_maps_to_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/rest/v1/chefs")
            .match_query(mockito::Matcher::Any)
            .with_status(401)
            .with_body(r#"{"message":"Invalid API key"}"#)
            .create_async()
            .await;

        let client = SupabaseClient::new(server.url(), "bad_key".to_string());
        let result = client.list_active_chefs(None, 50).await;

        assert!(matches!(result, Err(SupabaseError::Unauthorized)));
    }
}
