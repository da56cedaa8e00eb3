//! Key loader doubles.

use function_auth::{AuthError, KeyLoader, PemKeyLoader};
use jsonwebtoken::DecodingKey;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Parses keys like `PemKeyLoader` and counts how often it was asked to.
#[derive(Debug, Default)]
pub struct CountingKeyLoader {
    calls: AtomicUsize,
}

impl CountingKeyLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `load` calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl KeyLoader for CountingKeyLoader {
    fn load(&self, pem: &str) -> Result<DecodingKey, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        PemKeyLoader.load(pem)
    }
}
