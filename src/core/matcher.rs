use crate::models::{ChefProfile, DiscoveryFilters, NearbyChef, Position};
use crate::core::{
    distance::haversine_distance,
    filters::{is_available, matches_discovery},
};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<NearbyChef>,
    pub total_candidates: usize,
}

/// Classify which chefs can serve a given user position
///
/// A chef is retained iff the great-circle distance from the user to
/// the chef's base location is at most the chef's service radius; the
/// boundary is inclusive, so a radius exactly equal to the distance
/// still matches. Chefs without coordinates or radius are skipped.
///
/// Input order is preserved and the inputs are not mutated; the result
/// is a pure function of (user, chefs). Ordering by distance is a
/// separate step the caller opts into via [`sort_by_distance`].
pub fn find_nearby(user: Position, chefs: &[ChefProfile]) -> Vec<NearbyChef> {
    chefs
        .iter()
        .filter_map(|chef| {
            let position = chef.position()?;
            let radius_km = chef.service_radius_km?;
            let distance_km = haversine_distance(user, position);

            if distance_km <= radius_km {
                Some(NearbyChef {
                    chef_id: chef.id.clone(),
                    specialty: chef.specialty.clone(),
                    bio: chef.bio.clone(),
                    city: chef.city.clone(),
                    price_level: chef.price_level,
                    rating: chef.rating,
                    total_reviews: chef.total_reviews,
                    lat: position.lat,
                    lng: position.lng,
                    service_radius_km: radius_km,
                    distance_km,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Order matches by ascending distance
///
/// The stable sort keeps input order among equidistant chefs.
pub fn sort_by_distance(matches: &mut [NearbyChef]) {
    matches.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Availability filtering (active, locatable, positive radius)
/// 2. Discovery filtering (specialty, price level, rating)
/// 3. Proximity matching (inclusive geodesic radius check)
/// 4. Optional distance ordering and limit
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Run the full discovery pipeline for a resolved user position
    ///
    /// # Arguments
    /// * `user` - The resolved user position (real or fallback)
    /// * `candidates` - Chef profiles fetched from the backend
    /// * `filters` - Optional discovery filters
    /// * `limit` - Maximum number of matches to return
    /// * `order_by_distance` - Sort matches by ascending distance
    ///
    /// # Returns
    /// MatchResult with the retained chefs and the candidate count
    pub fn find_nearby_chefs(
        &self,
        user: Position,
        candidates: Vec<ChefProfile>,
        filters: &DiscoveryFilters,
        limit: usize,
        order_by_distance: bool,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let eligible: Vec<ChefProfile> = candidates
            .into_iter()
            // Stage 1: availability
            .filter(is_available)
            // Stage 2: discovery filters
            .filter(|chef| matches_discovery(chef, filters))
            .collect();

        // Stage 3: proximity matching, input order preserved
        let mut matches = find_nearby(user, &eligible);

        // Stage 4: optional ordering and limit
        if order_by_distance {
            sort_by_distance(&mut matches);
        }
        matches.truncate(limit);

        MatchResult {
            matches,
            total_candidates,
        }
    }
}
