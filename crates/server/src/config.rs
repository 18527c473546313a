//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PEPPERCORN_HOST` - Bind address (default: 127.0.0.1)
//! - `PEPPERCORN_PORT` - Listen port (default: 5000)
//! - `PEPPERCORN_SEED_DEMO` - Seed the demonstration catalog on startup
//!   (default: true)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//!
//! There are no required variables and no secrets: the store is volatile
//! process memory, so a bare `cargo run` brings up a fully working server.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Whether to seed the demonstration catalog at startup
    pub seed_demo_data: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("PEPPERCORN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("PEPPERCORN_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("PEPPERCORN_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("PEPPERCORN_PORT".to_string(), e.to_string())
            })?;
        let seed_demo_data = get_env_or_default("PEPPERCORN_SEED_DEMO", "true")
            .parse::<bool>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("PEPPERCORN_SEED_DEMO".to_string(), e.to_string())
            })?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            seed_demo_data,
            sentry_dsn,
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

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
