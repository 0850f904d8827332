// Service exports
pub mod cache;
pub mod supabase;

pub use cache::{CacheManager, CacheKey, CacheError, CacheStats};
pub use supabase::{SupabaseClient, SupabaseError};
