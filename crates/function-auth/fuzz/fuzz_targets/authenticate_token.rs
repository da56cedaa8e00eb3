#![no_main]

use function_auth::{AuthConfig, Authenticator, CachingKeyLoader, RuntimeIdentity};
use function_auth_test_utils::SIGNING_PUBLIC_KEY_PEM;
use libfuzzer_sys::fuzz_target;
use std::sync::{Arc, OnceLock};

static AUTHENTICATOR: OnceLock<Authenticator> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let authenticator = AUTHENTICATOR.get_or_init(|| {
        Authenticator::with_key_loader(
            AuthConfig::new(
                RuntimeIdentity::private("app-1", "ns-1"),
                SIGNING_PUBLIC_KEY_PEM,
            ),
            Arc::new(CachingKeyLoader::new()),
        )
    });

    // Arbitrary token text must produce a verdict, never a panic
    if let Ok(token) = std::str::from_utf8(data) {
        let _ = authenticator.authenticate_token(Some(token));
    }
});
