//! Public key loading.
//!
//! Decodes the PEM-encoded PKCS#1 RSA public key injected into the function
//! runtime into a `DecodingKey` for token verification.
//!
//! # Security
//!
//! - The first PEM block must hold a PKCS#1 RSA public key; its label is not
//!   checked, so SPKI, EC and private key material all fail DER decoding
//! - The base64 body may be wrapped at any width, or not at all
//! - Parser errors are logged for operators and collapsed into
//!   `AuthError::InvalidPublicKey` for callers

use crate::errors::AuthError;
use jsonwebtoken::DecodingKey;
use rsa::pkcs1::{DecodeRsaPublicKey, EncodeRsaPublicKey};
use rsa::RsaPublicKey;

/// Source of verification keys for the authenticator.
///
/// Implementations must be safe to share across concurrent requests.
pub trait KeyLoader: Send + Sync {
    /// Decode `pem` into a verification key.
    fn load(&self, pem: &str) -> Result<DecodingKey, AuthError>;
}

/// Loader that parses the PEM on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct PemKeyLoader;

impl KeyLoader for PemKeyLoader {
    fn load(&self, pem: &str) -> Result<DecodingKey, AuthError> {
        load_public_key(pem)
    }
}

/// Decode a PEM-encoded PKCS#1 RSA public key.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns `AuthError::InvalidPublicKey` if the string is empty, holds no PEM
/// block, or the first block does not decode as a PKCS#1 RSA public key.
pub fn load_public_key(pem: &str) -> Result<DecodingKey, AuthError> {
    let pem = pem.trim();
    if pem.is_empty() {
        tracing::warn!(target: "function_auth.public_key", "Public key is not configured");
        return Err(AuthError::InvalidPublicKey);
    }

    let block = pem::parse(pem).map_err(|e| {
        tracing::warn!(
            target: "function_auth.public_key",
            error = %e,
            "Public key is not PEM-encoded"
        );
        AuthError::InvalidPublicKey
    })?;

    let public_key = RsaPublicKey::from_pkcs1_der(block.contents()).map_err(|e| {
        tracing::warn!(
            target: "function_auth.public_key",
            error = %e,
            label = block.tag(),
            "Failed to parse PKCS#1 RSA public key"
        );
        AuthError::InvalidPublicKey
    })?;

    let der = public_key.to_pkcs1_der().map_err(|e| {
        tracing::warn!(
            target: "function_auth.public_key",
            error = %e,
            "Failed to encode RSA public key as DER"
        );
        AuthError::InvalidPublicKey
    })?;

    Ok(DecodingKey::from_rsa_der(der.as_bytes()))
}
