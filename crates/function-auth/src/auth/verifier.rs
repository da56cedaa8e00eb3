//! Token verification.
//!
//! Verifies a compact JWT against the loaded RSA key and validates its
//! temporal claims.
//!
//! # Security
//!
//! - Tokens are size-checked BEFORE parsing
//! - The header `alg` must be one of [`ACCEPTED_ALGORITHMS`]; anything else
//!   (HMAC, EC, EdDSA, `none`) is rejected before key use
//! - `exp`, `nbf` and `iat` are checked only when present and numeric
//! - Every failure collapses into `AuthError::TokenInvalid`

use crate::auth::claims::TokenClaimSet;
use crate::errors::AuthError;
use crate::jwt::{is_iat_valid, is_within_size_limit, ACCEPTED_ALGORITHMS};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::time::Duration;

/// Verify the token signature and temporal claims, returning the claim set.
///
/// # Errors
///
/// Returns `AuthError::TokenInvalid` if the token is oversized, malformed,
/// declares a non-RSA algorithm, fails signature verification, is expired,
/// is not yet valid, or was issued in the future.
pub fn verify_token(
    token: &str,
    key: &DecodingKey,
    clock_skew: Duration,
) -> Result<TokenClaimSet, AuthError> {
    if !is_within_size_limit(token) {
        return Err(AuthError::TokenInvalid);
    }

    let validation = build_validation(clock_skew);

    let token_data = decode::<TokenClaimSet>(token, key, &validation).map_err(|e| {
        tracing::debug!(target: "function_auth.verifier", error = %e, "Token verification failed");
        AuthError::TokenInvalid
    })?;

    if let Some(iat) = token_data.claims.iat {
        // Fractional seconds are truncated
        if !is_iat_valid(iat.trunc() as i64, clock_skew) {
            return Err(AuthError::TokenInvalid);
        }
    }

    tracing::debug!(
        target: "function_auth.verifier",
        alg = ?token_data.header.alg,
        "Token signature verified"
    );
    Ok(token_data.claims)
}

/// Validation settings: RSA family only, no mandatory claims, no audience.
fn build_validation(clock_skew: Duration) -> Validation {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
    validation.required_spec_claims.clear();
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation.validate_aud = false;
    validation.leeway = clock_skew.as_secs();
    validation
}
