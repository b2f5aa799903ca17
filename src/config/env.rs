// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 8003)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Google Maps API key, used by both the geocoding and places calls
    pub google_maps_api_key: String,

    /// Geocoding JSON endpoint
    pub geocode_endpoint: String,

    /// Places nearby search JSON endpoint
    pub places_endpoint: String,

    /// Per-request timeout in seconds, 0 disables it
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 8003,
            environment: "development".to_string(),
            log_level: "info".to_string(),
            google_maps_api_key: String::new(),
            geocode_endpoint: "https://maps.googleapis.com/maps/api/geocode/json".to_string(),
            places_endpoint: "https://maps.googleapis.com/maps/api/place/nearbysearch/json"
                .to_string(),
            request_timeout_secs: 0,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Config {
            server_address: lookup("SERVER_ADDRESS").unwrap_or(defaults.server_address),

            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),

            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),

            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),

            google_maps_api_key: lookup("GOOGLE_MAPS_API_KEY")
                .unwrap_or(defaults.google_maps_api_key),

            geocode_endpoint: lookup("GEOCODE_ENDPOINT").unwrap_or(defaults.geocode_endpoint),

            places_endpoint: lookup("PLACES_ENDPOINT").unwrap_or(defaults.places_endpoint),

            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.google_maps_api_key.trim().is_empty() {
            return Err("GOOGLE_MAPS_API_KEY is required".to_string());
        }

        if self.geocode_endpoint.is_empty() || self.places_endpoint.is_empty() {
            return Err("GEOCODE_ENDPOINT and PLACES_ENDPOINT must not be empty".to_string());
        }

        Ok(())
    }
}
