//! Application configuration loaded from environment variables.
//!
//! Everything here is non-sensitive; the check-in API carries no secrets.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Path to the spot catalog GeoJSON file
    pub spots_path: String,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => 8080,
        };

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            spots_path: env::var("SPOTS_PATH").unwrap_or_else(|_| "data/spots.geojson".to_string()),
            port,
        })
    }

    /// Default config for tests only.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            spots_path: "data/spots.geojson".to_string(),
            port: 8080,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: sibling tests run in parallel and PORT is process-global.
    #[test]
    fn test_config_from_env() {
        env::remove_var("PORT");
        env::remove_var("FRONTEND_URL");
        env::remove_var("SPOTS_PATH");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, 8080);
        assert_eq!(config.frontend_url, "http://localhost:5173");
        assert_eq!(config.spots_path, "data/spots.geojson");

        env::set_var("PORT", "not-a-port");
        let result = Config::from_env();
        env::remove_var("PORT");
        assert!(matches!(result, Err(ConfigError::Invalid("PORT", _))));
    }
}
