use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::Position;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub supabase: SupabaseSettings,
    pub cache: CacheSettings,
    pub discovery: DiscoverySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseSettings {
    pub url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub redis_url: String,
    pub ttl_secs: Option<u64>,
    pub l1_cache_size: Option<u64>,
}

/// Discovery policy: fallback position, result limits, and the
/// service-radius cap that bounds the candidate fetch
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverySettings {
    #[serde(default = "default_fallback_lat")]
    pub fallback_lat: f64,
    #[serde(default = "default_fallback_lng")]
    pub fallback_lng: f64,
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default = "default_max_service_radius")]
    pub max_service_radius_km: f64,
}

impl DiscoverySettings {
    /// The city-center coordinate used when a request carries no
    /// location (acquisition failed or was denied upstream)
    pub fn fallback_position(&self) -> Position {
        Position::new(self.fallback_lat, self.fallback_lng)
    }
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            fallback_lat: default_fallback_lat(),
            fallback_lng: default_fallback_lng(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_service_radius_km: default_max_service_radius(),
        }
    }
}

// São Paulo city center
fn default_fallback_lat() -> f64 { -23.5489 }
fn default_fallback_lng() -> f64 { -46.6388 }
fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }
fn default_max_service_radius() -> f64 { 100.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with CHEFMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with CHEFMATCH_)
            // e.g., CHEFMATCH_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("CHEFMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Substitute well-known environment variables for secrets
        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CHEFMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Substitute well-known environment variables in config values
///
/// SUPABASE_URL and SUPABASE_SERVICE_KEY are checked before the
/// CHEFMATCH_-prefixed forms so the service picks up the same secrets
/// the rest of the platform uses.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let supabase_url = env::var("SUPABASE_URL")
        .or_else(|_| env::var("CHEFMATCH_SUPABASE__URL"))
        .ok();
    let supabase_api_key = env::var("SUPABASE_SERVICE_KEY")
        .or_else(|_| env::var("CHEFMATCH_SUPABASE__API_KEY"))
        .ok();
    let redis_url = env::var("REDIS_URL")
        .or_else(|_| env::var("CHEFMATCH_CACHE__REDIS_URL"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = supabase_url {
        builder = builder.set_override("supabase.url", url)?;
    }
    if let Some(api_key) = supabase_api_key {
        builder = builder.set_override("supabase.api_key", api_key)?;
    }
    if let Some(url) = redis_url {
        builder = builder.set_override("cache.redis_url", url)?;
    }

    builder.build()
}
