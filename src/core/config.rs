//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Environment variable holding the SerpApi credential.
pub const SERPAPI_API_KEY_ENV: &str = "SERPAPI_API_KEY";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,

    /// SerpApi endpoint configuration.
    pub serpapi: SerpApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// SerpApi API key.
    /// Get one at: https://serpapi.com/manage-api-key
    pub serpapi_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "serpapi_api_key",
                &self.serpapi_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// SerpApi client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerpApiConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SerpApiConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Read `MCP_LOG_LEVEL` (default `info`).
    pub fn from_env() -> Self {
        std::env::var("MCP_LOG_LEVEL")
            .map(|level| Self { level })
            .unwrap_or_default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "serpapi-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            serpapi: SerpApiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...). SerpApi settings use the
    /// `SERPAPI_` prefix.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        match std::env::var(SERPAPI_API_KEY_ENV) {
            Ok(api_key) if !api_key.is_empty() => {
                config.credentials.serpapi_api_key = Some(api_key);
                info!("SerpApi API key loaded from environment");
            }
            _ => {
                warn!(
                    "{} is not set - search and locations calls will fail until it is configured",
                    SERPAPI_API_KEY_ENV
                );
            }
        }

        if let Ok(timeout) = std::env::var("SERPAPI_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.serpapi.timeout_secs = secs,
                Err(_) => warn!("Ignoring invalid SERPAPI_TIMEOUT_SECS value: {}", timeout),
            }
        }

        config
    }

    /// Check the configuration for values that would make every call fail.
    ///
    /// A missing credential is not an error here: the server starts and
    /// reports it per call.
    pub fn validate(&self) -> Result<()> {
        if self.serpapi.timeout_secs == 0 {
            return Err(Error::config("SerpApi timeout must be at least one second"));
        }

        Ok(())
    }
}
