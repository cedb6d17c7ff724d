//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MOBILEMART_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)
//! - `SUMMARY_SERVICE_URL` - Base URL of the external summarization service
//!
//! ## Optional
//! - `MOBILEMART_HOST` - Bind address (default: 127.0.0.1)
//! - `MOBILEMART_PORT` - Listen port (default: 3001)
//! - `SUMMARY_TIMEOUT_SECS` - Summarization request timeout (default: 30)
//! - `FILTER_OPTIONS_PATH` - Path to the filter options descriptor
//!   (default: filter_options.json)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

/// Default summarization service timeout in seconds.
const DEFAULT_SUMMARY_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Base URL of the external summarization service
    pub summary_service_url: String,
    /// Timeout applied to every summarization request
    pub summary_timeout: Duration,
    /// Path to the filter options descriptor file
    pub filter_options_path: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("MOBILEMART_DATABASE_URL")?;
        let host = get_env_or_default("MOBILEMART_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("MOBILEMART_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("MOBILEMART_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("MOBILEMART_PORT".to_string(), e.to_string())
            })?;

        let summary_service_url = get_required_env("SUMMARY_SERVICE_URL")?;
        let summary_timeout_secs =
            get_env_or_default("SUMMARY_TIMEOUT_SECS", &DEFAULT_SUMMARY_TIMEOUT_SECS.to_string())
                .parse::<u64>()
                .map_err(|e| {
                    ConfigError::InvalidEnvVar("SUMMARY_TIMEOUT_SECS".to_string(), e.to_string())
                })?;

        let filter_options_path =
            PathBuf::from(get_env_or_default("FILTER_OPTIONS_PATH", "filter_options.json"));

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            database_url,
            host,
            port,
            summary_service_url,
            summary_timeout: Duration::from_secs(summary_timeout_secs),
            filter_options_path,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    // Try primary key first (e.g., MOBILEMART_DATABASE_URL)
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    // Fallback to generic DATABASE_URL
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> ApiConfig {
        ApiConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3001,
            summary_service_url: "http://localhost:5000".to_string(),
            summary_timeout: Duration::from_secs(30),
            filter_options_path: PathBuf::from("filter_options.json"),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3001);
    }

    #[test]
    fn test_default_summary_timeout() {
        let config = test_config();
        assert_eq!(config.summary_timeout, Duration::from_secs(30));
    }
}
