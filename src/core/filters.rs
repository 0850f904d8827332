use crate::models::{ChefProfile, DiscoveryFilters};

/// Check if a chef can be offered for discovery at all
///
/// Chefs must be explicitly active and carry usable coordinates and a
/// non-negative service radius. The Supabase query already filters on
/// `is_active`; this re-checks locally so the matcher never depends on
/// how the candidates were fetched.
#[inline]
pub fn is_available(chef: &ChefProfile) -> bool {
    chef.active()
        && chef.position().is_some()
        && chef.service_radius_km.is_some_and(|r| r >= 0.0)
}

/// Check if a chef matches the request's discovery filters
///
/// Absent filters match everything. Specialty comparison is
/// case-insensitive; a chef with no rating fails a minimum-rating
/// filter.
#[inline]
pub fn matches_discovery(chef: &ChefProfile, filters: &DiscoveryFilters) -> bool {
    if let Some(specialty) = &filters.specialty {
        if !chef.specialty.eq_ignore_ascii_case(specialty) {
            return false;
        }
    }

    if let Some(max_price) = filters.max_price_level {
        if chef.price_level > max_price {
            return false;
        }
    }

    if let Some(min_rating) = filters.min_rating {
        match chef.rating {
            Some(rating) if rating >= min_rating => {}
            _ => return false,
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_chef(specialty: &str, price_level: u8, rating: Option<f64>) -> ChefProfile {
        ChefProfile {
            id: "chef_1".to_string(),
            specialty: specialty.to_string(),
            bio: None,
            city: Some("São Paulo".to_string()),
            price_level,
            rating,
            total_reviews: Some(12),
            lat: Some(-23.5489),
            lng: Some(-46.6388),
            service_radius_km: Some(15.0),
            is_active: Some(true),
            created_at: None,
        }
    }

    #[test]
    fn test_available_chef() {
        let chef = create_test_chef("Culinária Italiana", 2, Some(4.9));
        assert!(is_available(&chef));
    }

    #[test]
    fn test_inactive_chef_unavailable() {
        let mut chef = create_test_chef("Culinária Italiana", 2, Some(4.9));
        chef.is_active = Some(false);
        assert!(!is_available(&chef));

        chef.is_active = None;
        assert!(!is_available(&chef));
    }

    #[test]
    fn test_chef_without_location_unavailable() {
        let mut chef = create_test_chef("Culinária Italiana", 2, Some(4.9));
        chef.lng = None;
        assert!(!is_available(&chef));
    }

    #[test]
    fn test_chef_without_radius_unavailable() {
        let mut chef = create_test_chef("Culinária Italiana", 2, Some(4.9));
        chef.service_radius_km = None;
        assert!(!is_available(&chef));

        chef.service_radius_km = Some(-1.0);
        assert!(!is_available(&chef));
    }

    #[test]
    fn test_empty_filters_match_all() {
        let chef = create_test_chef("Frutos do Mar", 3, None);
        assert!(matches_discovery(&chef, &DiscoveryFilters::default()));
    }

    #[test]
    fn test_specialty_filter_case_insensitive() {
        let chef = create_test_chef("Frutos do Mar", 3, Some(4.8));
        let filters = DiscoveryFilters {
            specialty: Some("frutos do mar".to_string()),
            ..Default::default()
        };
        assert!(matches_discovery(&chef, &filters));

        let filters = DiscoveryFilters {
            specialty: Some("Culinária Vegana".to_string()),
            ..Default::default()
        };
        assert!(!matches_discovery(&chef, &filters));
    }

    #[test]
    fn test_price_level_filter() {
        let chef = create_test_chef("Frutos do Mar", 3, Some(4.8));
        let filters = DiscoveryFilters {
            max_price_level: Some(3),
            ..Default::default()
        };
        assert!(matches_discovery(&chef, &filters));

        let filters = DiscoveryFilters {
            max_price_level: Some(2),
            ..Default::default()
        };
        assert!(!matches_discovery(&chef, &filters));
    }

    #[test]
    fn test_min_rating_filter() {
        let chef = create_test_chef("Frutos do Mar", 3, Some(4.8));
        let filters = DiscoveryFilters {
            min_rating: Some(4.5),
            ..Default::default()
        };
        assert!(matches_discovery(&chef, &filters));

        let filters = DiscoveryFilters {
            min_rating: Some(4.9),
            ..Default::default()
        };
        assert!(!matches_discovery(&chef, &filters));
    }

    #[test]
    fn test_unrated_chef_fails_min_rating() {
        let chef = create_test_chef("Frutos do Mar", 3, None);
        let filters = DiscoveryFilters {
            min_rating: Some(1.0),
            ..Default::default()
        };
        assert!(!matches_discovery(&chef, &filters));
    }
}
