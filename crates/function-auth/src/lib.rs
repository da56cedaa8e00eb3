//! Function Auth Library
//!
//! Authenticates inbound requests to a serverless function by verifying the
//! signed token carried in the `SCW_FUNCTIONS_TOKEN` header and matching its
//! application claims against the function's own runtime identity.
//!
//! # Flow
//!
//! ```text
//! Authenticator -> public? -> token header -> KeyLoader -> verify_token
//!               -> extract_application_claim -> match_identity -> Access
//! ```
//!
//! # Modules
//!
//! - `config` - Runtime identity and key configuration from environment
//! - `errors` - Caller-facing error kinds with HTTP status mapping
//! - `jwt` - Size limits, accepted algorithms and clock skew helpers
//! - `auth` - Key loading, token verification, claim extraction, matching
//! - `authenticator` - Orchestrates a single authentication check
//! - `middleware` - Axum middleware guarding function routes
//!
//! # Example
//!
//! ```rust,ignore
//! use function_auth::{AuthConfig, Authenticator};
//!
//! let authenticator = Authenticator::new(AuthConfig::from_env()?);
//! match authenticator.authenticate(request.headers()) {
//!     Ok(access) => { /* run the function */ }
//!     Err(e) => return e.into_response(),
//! }
//! ```

pub mod auth;
pub mod authenticator;
pub mod config;
pub mod errors;
pub mod jwt;
pub mod middleware;

pub use auth::{
    extract_application_claim, load_public_key, match_identity, verify_token, ApplicationClaim,
    CachingKeyLoader, KeyLoader, MatchedScope, PemKeyLoader, TokenClaimSet,
};
pub use authenticator::{Access, Authenticator, TOKEN_HEADER};
pub use config::{AuthConfig, ConfigError, RuntimeIdentity};
pub use errors::AuthError;
pub use middleware::{require_function_auth, AccessExt};
