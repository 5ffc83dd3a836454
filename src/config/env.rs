// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 5002)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Default RUST_LOG filter (e.g., "info,actix_web=info")
    pub log_level: String,

    /// Google Maps Platform API key
    pub api_key: String,

    /// The single origin allowed to call the API from a browser
    pub allowed_origin: String,

    /// Base URL of the Google Maps web services
    pub google_maps_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            server_address: lookup("SERVER_ADDRESS").unwrap_or_else(|| "127.0.0.1".to_string()),

            server_port: lookup("PORT")
                .unwrap_or_else(|| "5002".to_string())
                .parse()
                .unwrap_or(5002),

            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),

            log_level: lookup("LOG_LEVEL")
                .unwrap_or_else(|| "info,actix_web=info".to_string()),

            api_key: lookup("API_KEY").unwrap_or_default(),

            allowed_origin: lookup("ALLOWED_ORIGIN")
                .unwrap_or_else(|| "https://u-care.netlify.app".to_string()),

            google_maps_base_url: lookup("GOOGLE_MAPS_BASE_URL")
                .unwrap_or_else(|| "https://maps.googleapis.com/maps/api".to_string()),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.allowed_origin.is_empty() {
            return Err("ALLOWED_ORIGIN must not be empty".to_string());
        }

        if self.google_maps_base_url.is_empty() {
            return Err("GOOGLE_MAPS_BASE_URL must not be empty".to_string());
        }

        if self.api_key.is_empty() {
            log::warn!("API_KEY not configured - upstream requests will be denied");
        }

        Ok(())
    }
}
