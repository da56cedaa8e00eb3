//! JWT constants and helpers used by the token verifier.
//!
//! - Size limit checked before any decoding
//! - The accepted RSA algorithm family
//! - Clock skew bounds and `iat` validation
//!
//! # Security
//!
//! - Tokens are size-checked BEFORE parsing
//! - Only RSA signature algorithms (PKCS#1 v1.5 and PSS) are accepted
//! - Errors carry no detail; specifics are logged at debug level

use jsonwebtoken::Algorithm;
use std::time::Duration;

/// Maximum allowed token size in bytes (8KB).
///
/// Typical function tokens are well under 2KB (RSA-2048 signature plus a
/// handful of claims). Larger tokens are rejected before base64 decoding or
/// signature work.
pub const MAX_TOKEN_SIZE_BYTES: usize = 8192;

/// Default clock skew tolerance: none. `exp`, `nbf` and `iat` are compared
/// strictly against the current time.
pub const DEFAULT_CLOCK_SKEW: Duration = Duration::from_secs(0);

/// Maximum configurable clock skew tolerance (10 minutes).
pub const MAX_CLOCK_SKEW: Duration = Duration::from_secs(600);

/// Algorithms a token header may declare. All belong to the RSA family, which
/// is the only family a PKCS#1 RSA public key can verify.
pub const ACCEPTED_ALGORITHMS: [Algorithm; 6] = [
    Algorithm::RS256,
    Algorithm::RS384,
    Algorithm::RS512,
    Algorithm::PS256,
    Algorithm::PS384,
    Algorithm::PS512,
];

/// Returns true if the token is within the size limit.
pub fn is_within_size_limit(token: &str) -> bool {
    if token.len() > MAX_TOKEN_SIZE_BYTES {
        tracing::debug!(
            target: "function_auth.jwt",
            token_size = token.len(),
            max_size = MAX_TOKEN_SIZE_BYTES,
            "Token rejected: size exceeds maximum allowed"
        );
        return false;
    }
    true
}

/// Validate the `iat` (issued-at) claim with clock skew tolerance.
///
/// Returns false if `iat` is more than `clock_skew` in the future.
pub fn is_iat_valid(iat: i64, clock_skew: Duration) -> bool {
    let now = chrono::Utc::now().timestamp();
    is_iat_valid_at(iat, clock_skew, now)
}

/// Deterministic `iat` check against an explicit `now` timestamp.
pub(crate) fn is_iat_valid_at(iat: i64, clock_skew: Duration, now: i64) -> bool {
    // clock_skew is bounded by MAX_CLOCK_SKEW at configuration time
    let clock_skew_secs = i64::try_from(clock_skew.as_secs()).unwrap_or(i64::MAX);
    let max_iat = now.saturating_add(clock_skew_secs);

    if iat > max_iat {
        tracing::debug!(
            target: "function_auth.jwt",
            iat = iat,
            now = now,
            max_allowed = max_iat,
            clock_skew_secs = clock_skew_secs,
            "Token rejected: iat in the future"
        );
        return false;
    }

    true
}
