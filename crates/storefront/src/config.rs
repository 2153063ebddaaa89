//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MADRONA_API_URL` - Storefront API root (default: `http://localhost:5000/api`)
//! - `MADRONA_DATA_DIR` - Directory for the persisted client cache (default: `.madrona`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_DATA_DIR: &str = ".madrona";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root URL of the storefront API, without a trailing slash.
    pub api_url: Url,
    /// Directory holding the persisted client cache.
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `MADRONA_API_URL` is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw_url =
            std::env::var("MADRONA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        let api_url = parse_api_url(&raw_url)?;

        let data_dir = std::env::var("MADRONA_DATA_DIR")
            .map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        Ok(Self { api_url, data_dir })
    }

    /// The API root as a string with any trailing slash removed.
    #[must_use]
    pub fn api_root(&self) -> String {
        self.api_url.as_str().trim_end_matches('/').to_owned()
    }
}

fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("MADRONA_API_URL".to_owned(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "MADRONA_API_URL".to_owned(),
            format!("unsupported scheme: {}", url.scheme()),
        ));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_url_accepts_http() {
        assert!(parse_api_url("http://localhost:5000/api").is_ok());
        assert!(parse_api_url("https://shop.example.com/api").is_ok());
    }

    #[test]
    fn test_parse_api_url_rejects_garbage() {
        assert!(parse_api_url("not a url").is_err());
        assert!(parse_api_url("ftp://shop.example.com").is_err());
    }

    #[test]
    fn test_api_root_strips_trailing_slash() {
        let config = ClientConfig {
            api_url: parse_api_url("http://localhost:5000/api/").expect("valid url"),
            data_dir: PathBuf::from(".madrona"),
        };
        assert_eq!(config.api_root(), "http://localhost:5000/api");
    }
}
