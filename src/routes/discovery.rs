use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::DiscoverySettings;
use crate::core::{calculate_bounding_box, Matcher};
use crate::models::{
    ChefProfile, DiscoveryFilters, ErrorResponse, HealthResponse, NearbyChefsRequest,
    NearbyChefsResponse, Position,
};
use crate::services::{CacheKey, CacheManager, SupabaseClient, SupabaseError};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub supabase: Arc<SupabaseClient>,
    pub cache: Arc<CacheManager>,
    pub matcher: Matcher,
    pub discovery: DiscoverySettings,
}

/// Configure all discovery-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/chefs/nearby", web::post().to(find_nearby_chefs))
        .route("/chefs/{chef_id}", web::get().to(get_chef));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    // Check backend reachability
    let backend_healthy = state.supabase.health_check().await.unwrap_or(false);

    let status = if backend_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find nearby chefs endpoint
///
/// POST /api/v1/chefs/nearby
///
/// Request body:
/// ```json
/// {
///   "lat": -23.5489,
///   "lng": -46.6388,
///   "limit": 20,
///   "specialty": "string",
///   "maxPriceLevel": 3,
///   "minRating": 4.0,
///   "orderByDistance": false
/// }
/// ```
///
/// Coordinates are optional: a request without both of them is served
/// from the configured fallback position and flagged `usedFallback`.
async fn find_nearby_chefs(
    state: web::Data<AppState>,
    req: web::Json<NearbyChefsRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for nearby chefs request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Cap limit to prevent excessive queries
    let limit = req.limit.min(state.discovery.max_limit) as usize;

    // Resolve the user position once; location acquisition failures
    // upstream surface here as missing coordinates
    let (position, used_fallback) = match (req.lat, req.lng) {
        (Some(lat), Some(lng)) => (Position::new(lat, lng), false),
        _ => (state.discovery.fallback_position(), true),
    };

    tracing::info!(
        "Finding nearby chefs at ({:.4}, {:.4}), limit: {}, fallback: {}",
        position.lat,
        position.lng,
        limit,
        used_fallback
    );

    // Serve candidates from cache when possible; the key rounds the
    // position so nearby requests share an entry
    let cache_key = CacheKey::active_chefs(position);
    let candidates: Vec<ChefProfile> = match state.cache.get(&cache_key).await {
        Ok(chefs) => chefs,
        Err(_) => {
            let bbox =
                calculate_bounding_box(position, state.discovery.max_service_radius_km);

            let chefs = match state
                .supabase
                .list_active_chefs(Some(&bbox), state.discovery.max_limit as usize * 5)
                .await
            {
                Ok(chefs) => chefs,
                Err(e) => {
                    tracing::error!("Failed to query chefs: {}", e);
                    return HttpResponse::BadGateway().json(ErrorResponse {
                        error: "Failed to query chefs".to_string(),
                        message: e.to_string(),
                        status_code: 502,
                    });
                }
            };

            if let Err(e) = state.cache.set(&cache_key, &chefs).await {
                tracing::warn!("Failed to cache chef candidates: {}", e);
            }

            chefs
        }
    };

    tracing::debug!("Matching against {} candidates", candidates.len());

    let filters = DiscoveryFilters {
        specialty: req.specialty.clone(),
        max_price_level: req.max_price_level,
        min_rating: req.min_rating,
    };

    // Run the matching pipeline
    let result = state.matcher.find_nearby_chefs(
        position,
        candidates,
        &filters,
        limit,
        req.order_by_distance,
    );

    let response = NearbyChefsResponse {
        chefs: result.matches,
        total_candidates: result.total_candidates,
        position,
        used_fallback,
    };

    tracing::info!(
        "Returning {} nearby chefs (from {} candidates)",
        response.chefs.len(),
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Get a single chef profile
///
/// GET /api/v1/chefs/{chefId}
///
/// Pure pass-through to the backend, used by the profile view; no
/// matching semantics.
async fn get_chef(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let chef_id = path.into_inner();

    let cache_key = CacheKey::chef(&chef_id);
    if let Ok(chef) = state.cache.get::<ChefProfile>(&cache_key).await {
        return HttpResponse::Ok().json(chef);
    }

    match state.supabase.get_chef(&chef_id).await {
        Ok(chef) => {
            if let Err(e) = state.cache.set(&cache_key, &chef).await {
                tracing::warn!("Failed to cache chef {}: {}", chef_id, e);
            }
            HttpResponse::Ok().json(chef)
        }
        Err(SupabaseError::NotFound(message)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Chef not found".to_string(),
            message,
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch chef {}: {}", chef_id, e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Failed to fetch chef".to_string(),
                message: e.to_string(),
                status_code: 502,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_position_resolution_falls_back_without_both_coordinates() {
        let discovery = DiscoverySettings::default();

        for (lat, lng) in [(None, None), (Some(-23.0), None), (None, Some(-46.0))] {
            let (position, used_fallback) = match (lat, lng) {
                (Some(lat), Some(lng)) => (Position::new(lat, lng), false),
                _ => (discovery.fallback_position(), true),
            };
            assert!(used_fallback);
            assert_eq!(position, discovery.fallback_position());
        }
    }
}
