//! Function runtime configuration.

use function_auth::AuthConfig;
use std::collections::HashMap;
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Default bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Server bind address.
    pub bind_address: String,

    /// Per-request timeout applied by the router.
    pub request_timeout: Duration,

    /// Function authentication settings.
    pub auth: AuthConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid request timeout configuration: {0}")]
    InvalidRequestTimeout(String),

    #[error(transparent)]
    Auth(#[from] function_auth::ConfigError),
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let timeout_seconds = if let Some(value_str) = vars.get("REQUEST_TIMEOUT_SECONDS") {
            let value: u64 = value_str.parse().map_err(|e| {
                ConfigError::InvalidRequestTimeout(format!(
                    "REQUEST_TIMEOUT_SECONDS must be a valid positive integer, got '{value_str}': {e}"
                ))
            })?;

            if value == 0 {
                return Err(ConfigError::InvalidRequestTimeout(
                    "REQUEST_TIMEOUT_SECONDS must be greater than 0".to_string(),
                ));
            }

            value
        } else {
            DEFAULT_REQUEST_TIMEOUT_SECONDS
        };

        let auth = AuthConfig::from_vars(vars)?;

        Ok(Self {
            bind_address,
            request_timeout: Duration::from_secs(timeout_seconds),
            auth,
        })
    }
}
