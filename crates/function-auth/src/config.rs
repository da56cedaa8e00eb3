//! Function auth configuration.
//!
//! Configuration is loaded from the environment variables injected into the
//! function runtime. The key and identity values are not validated here: a
//! missing value is reported per request as the matching `AuthError`, so a
//! misconfigured function rejects every request instead of failing to start.

use crate::jwt::{DEFAULT_CLOCK_SKEW, MAX_CLOCK_SKEW};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Set to `"true"` when the function is public and needs no token.
pub const ENV_PUBLIC: &str = "SCW_PUBLIC";

/// PEM-encoded PKCS#1 RSA public key used to verify tokens.
pub const ENV_PUBLIC_KEY: &str = "SCW_PUBLIC_KEY";

/// Identifier of the running application.
pub const ENV_APPLICATION_ID: &str = "SCW_APPLICATION_ID";

/// Identifier of the namespace the application belongs to.
pub const ENV_NAMESPACE_ID: &str = "SCW_NAMESPACE_ID";

/// Optional clock skew tolerance applied to `exp`, `nbf` and `iat`.
pub const ENV_CLOCK_SKEW_SECONDS: &str = "FUNCTION_AUTH_CLOCK_SKEW_SECONDS";

/// Identity of the function instance currently executing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuntimeIdentity {
    pub application_id: String,
    pub namespace_id: String,
    pub is_public: bool,
}

impl RuntimeIdentity {
    /// Identity of a private function that requires a token.
    pub fn private(application_id: impl Into<String>, namespace_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            namespace_id: namespace_id.into(),
            is_public: false,
        }
    }

    /// Identity of a public function. No token is inspected.
    pub fn public(application_id: impl Into<String>, namespace_id: impl Into<String>) -> Self {
        Self {
            is_public: true,
            ..Self::private(application_id, namespace_id)
        }
    }
}

/// Authentication configuration.
///
/// Read-only once built. The Debug output omits the key body.
#[derive(Clone)]
pub struct AuthConfig {
    /// Identity the token claims are matched against.
    pub identity: RuntimeIdentity,

    /// PEM-encoded PKCS#1 RSA public key (may be empty if not injected).
    pub public_key_pem: String,

    /// Clock skew tolerance for temporal claims (default: 0).
    pub clock_skew: Duration,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("identity", &self.identity)
            .field(
                "public_key_pem",
                &format_args!("[{} bytes]", self.public_key_pem.len()),
            )
            .field("clock_skew", &self.clock_skew)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid clock skew configuration: {0}")]
    InvalidClockSkew(String),
}

impl AuthConfig {
    /// Build a configuration with the default clock skew.
    pub fn new(identity: RuntimeIdentity, public_key_pem: impl Into<String>) -> Self {
        Self {
            identity,
            public_key_pem: public_key_pem.into(),
            clock_skew: DEFAULT_CLOCK_SKEW,
        }
    }

    /// Set the clock skew tolerance.
    pub fn with_clock_skew(mut self, clock_skew: Duration) -> Self {
        self.clock_skew = clock_skew;
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let is_public = vars.get(ENV_PUBLIC).is_some_and(|value| value == "true");

        let identity = RuntimeIdentity {
            application_id: vars.get(ENV_APPLICATION_ID).cloned().unwrap_or_default(),
            namespace_id: vars.get(ENV_NAMESPACE_ID).cloned().unwrap_or_default(),
            is_public,
        };

        let public_key_pem = vars.get(ENV_PUBLIC_KEY).cloned().unwrap_or_default();

        let clock_skew = if let Some(value_str) = vars.get(ENV_CLOCK_SKEW_SECONDS) {
            let value: u64 = value_str.parse().map_err(|e| {
                ConfigError::InvalidClockSkew(format!(
                    "{ENV_CLOCK_SKEW_SECONDS} must be a non-negative integer, got '{value_str}': {e}"
                ))
            })?;

            if value > MAX_CLOCK_SKEW.as_secs() {
                return Err(ConfigError::InvalidClockSkew(format!(
                    "{ENV_CLOCK_SKEW_SECONDS} must not exceed {} seconds, got {value}",
                    MAX_CLOCK_SKEW.as_secs()
                )));
            }

            Duration::from_secs(value)
        } else {
            DEFAULT_CLOCK_SKEW
        };

        Ok(Self {
            identity,
            public_key_pem,
            clock_skew,
        })
    }
}
