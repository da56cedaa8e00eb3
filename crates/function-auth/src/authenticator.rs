//! Authentication check orchestration.
//!
//! Runs the steps of one check in a fixed order and stops at the first
//! failure:
//!
//! 1. Public function -> `Access::Public`, no token inspected
//! 2. Token header present and non-empty, else `NoToken`
//! 3. Key load, else `InvalidPublicKey`
//! 4. Signature and temporal claims, else `TokenInvalid`
//! 5. First application claim, else `ClaimsInvalid`
//! 6. Runtime application ID then namespace ID non-empty, else
//!    `MissingApplicationId` / `MissingNamespaceId`
//! 7. Namespace or application match, else `ClaimMismatch`

use crate::auth::{
    extract_application_claim, match_identity, verify_token, KeyLoader, MatchedScope,
    PemKeyLoader,
};
use crate::config::AuthConfig;
use crate::errors::AuthError;
use axum::http::HeaderMap;
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

/// Request header carrying the function token (`SCW_FUNCTIONS_TOKEN`).
///
/// Header names are case-insensitive; the lowercase form is valid for both
/// lookups and `HeaderName::from_static`.
pub const TOKEN_HEADER: &str = "scw_functions_token";

/// Successful verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "scope", rename_all = "snake_case")]
pub enum Access {
    /// The function is public; no token was checked.
    Public,

    /// A verified token authorized this function.
    Granted(MatchedScope),
}

/// Authenticates requests against one function's configuration.
///
/// Holds no per-request state and is shared across requests behind an `Arc`.
pub struct Authenticator {
    config: AuthConfig,
    key_loader: Arc<dyn KeyLoader>,
}

impl Authenticator {
    /// Create an authenticator that parses the public key on every check.
    pub fn new(config: AuthConfig) -> Self {
        Self::with_key_loader(config, Arc::new(PemKeyLoader))
    }

    /// Create an authenticator with a specific key loader.
    pub fn with_key_loader(config: AuthConfig, key_loader: Arc<dyn KeyLoader>) -> Self {
        Self { config, key_loader }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Authenticate a request from its headers.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's `AuthError`.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Access, AuthError> {
        let token = headers
            .get(TOKEN_HEADER)
            .map(|value| String::from_utf8_lossy(value.as_bytes()));

        self.authenticate_token(token.as_deref())
    }

    /// Authenticate an already-extracted token.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's `AuthError`.
    #[instrument(skip_all, name = "function_auth.authenticate")]
    pub fn authenticate_token(&self, token: Option<&str>) -> Result<Access, AuthError> {
        let verdict = self.check(token);

        match &verdict {
            Ok(access) => {
                tracing::debug!(target: "function_auth.authenticator", access = ?access, "Request authenticated");
            }
            Err(e) if e.is_misconfiguration() => {
                tracing::warn!(target: "function_auth.authenticator", error = %e, "Function auth misconfigured, request rejected");
            }
            Err(e) => {
                tracing::debug!(target: "function_auth.authenticator", error = %e, "Request rejected");
            }
        }

        verdict
    }

    fn check(&self, token: Option<&str>) -> Result<Access, AuthError> {
        let identity = &self.config.identity;

        if identity.is_public {
            return Ok(Access::Public);
        }

        let token = token
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::NoToken)?;

        let key = self.key_loader.load(&self.config.public_key_pem)?;

        let claims = verify_token(token, &key, self.config.clock_skew)?;

        let claim = extract_application_claim(&claims)?;

        if identity.application_id.is_empty() {
            return Err(AuthError::MissingApplicationId);
        }
        if identity.namespace_id.is_empty() {
            return Err(AuthError::MissingNamespaceId);
        }

        let scope = match_identity(&claim, identity)?;
        Ok(Access::Granted(scope))
    }
}
