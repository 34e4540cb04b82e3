//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local development.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_BOUNDARIES_PATH: &str = "data/HangJeongDong_ver20250401.geojson";
const DEFAULT_VWORLD_BASE_URL: &str = "https://api.vworld.kr";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// GeoJSON FeatureCollection of administrative boundaries
    pub boundaries_path: PathBuf,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// VWorld geocoding API base URL
    pub vworld_base_url: String,
    /// VWorld API key; geocoding is disabled without it
    pub vworld_api_key: Option<String>,
    /// Timeout for outbound geocoding requests
    pub geocode_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => 8080,
        };

        let geocode_timeout = match env::var("GEOCODE_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(
                raw.parse()
                    .map_err(|_| ConfigError::Invalid("GEOCODE_TIMEOUT_SECS"))?,
            ),
            Err(_) => Duration::from_secs(10),
        };

        Ok(Self {
            port,
            boundaries_path: env::var("BOUNDARIES_PATH")
                .unwrap_or_else(|_| DEFAULT_BOUNDARIES_PATH.to_string())
                .into(),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            vworld_base_url: env::var("VWORLD_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_VWORLD_BASE_URL.to_string()),
            vworld_api_key: env::var("VWORLD_API_KEY")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            geocode_timeout,
        })
    }

    /// Config for tests: no API key, nothing read from the environment.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            boundaries_path: DEFAULT_BOUNDARIES_PATH.into(),
            frontend_url: "http://localhost:3000".to_string(),
            vworld_base_url: DEFAULT_VWORLD_BASE_URL.to_string(),
            vworld_api_key: None,
            geocode_timeout: Duration::from_secs(1),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
