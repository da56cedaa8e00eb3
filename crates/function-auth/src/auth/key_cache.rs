//! Caching key loader.
//!
//! Keeps parsed keys keyed by the exact PEM string so repeated checks skip
//! PKCS#1 parsing. Entries are never mutated once inserted; two requests
//! racing on the same PEM insert equivalent keys.

use crate::auth::public_key::{load_public_key, KeyLoader};
use crate::errors::AuthError;
use jsonwebtoken::DecodingKey;
use std::collections::HashMap;
use std::sync::RwLock;

/// Key loader that memoizes successful parses.
///
/// Failed parses are not cached.
#[derive(Default)]
pub struct CachingKeyLoader {
    keys: RwLock<HashMap<String, DecodingKey>>,
}

impl CachingKeyLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached keys.
    pub fn len(&self) -> usize {
        self.keys.read().map(|keys| keys.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyLoader for CachingKeyLoader {
    fn load(&self, pem: &str) -> Result<DecodingKey, AuthError> {
        if let Ok(keys) = self.keys.read() {
            if let Some(key) = keys.get(pem) {
                return Ok(key.clone());
            }
        }

        // Parse outside the lock
        let key = load_public_key(pem)?;

        match self.keys.write() {
            Ok(mut keys) => {
                keys.insert(pem.to_string(), key.clone());
            }
            Err(_) => {
                tracing::warn!(
                    target: "function_auth.key_cache",
                    "Key cache lock poisoned, serving uncached key"
                );
            }
        }

        Ok(key)
    }
}
