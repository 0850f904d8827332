// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;

pub use distance::{haversine_distance, calculate_bounding_box, is_within_bounding_box, EARTH_RADIUS_KM};
pub use filters::{is_available, matches_discovery};
pub use matcher::{Matcher, MatchResult, find_nearby, sort_by_distance};
