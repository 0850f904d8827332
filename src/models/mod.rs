// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Position, ChefProfile, NearbyChef, BoundingBox, DiscoveryFilters};
pub use requests::NearbyChefsRequest;
pub use responses::{NearbyChefsResponse, HealthResponse, ErrorResponse};
