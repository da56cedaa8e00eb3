//! Fixed test identities for deterministic tests

use function_auth::{AuthConfig, RuntimeIdentity};

use crate::crypto_fixtures::SIGNING_PUBLIC_KEY_PEM;

// Function identity the fixtures run as
pub const TEST_APPLICATION_ID: &str = "app-1";
pub const TEST_NAMESPACE_ID: &str = "ns-1";

// Identities that belong to someone else
pub const OTHER_APPLICATION_ID: &str = "app-2";
pub const OTHER_NAMESPACE_ID: &str = "ns-2";

/// Private identity for the test function.
pub fn test_identity() -> RuntimeIdentity {
    RuntimeIdentity::private(TEST_APPLICATION_ID, TEST_NAMESPACE_ID)
}

/// Config for the test function verifying with the primary signing key.
pub fn test_auth_config() -> AuthConfig {
    AuthConfig::new(test_identity(), SIGNING_PUBLIC_KEY_PEM)
}

/// Config for a public test function.
pub fn public_auth_config() -> AuthConfig {
    AuthConfig::new(
        RuntimeIdentity::public(TEST_APPLICATION_ID, TEST_NAMESPACE_ID),
        SIGNING_PUBLIC_KEY_PEM,
    )
}
