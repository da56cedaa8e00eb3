//! # Function Auth Test Utilities
//!
//! Shared test utilities for the function authentication crates.
//!
//! This crate provides:
//! - Fixed RSA key fixtures (PKCS#1 and wrong-format keys)
//! - Token builder (TestTokenBuilder)
//! - Fixed test identities and configs
//! - Key loader doubles (CountingKeyLoader)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use function_auth_test_utils::*;
//!
//! let token = TestTokenBuilder::new()
//!     .with_application_claim(TEST_NAMESPACE_ID, TEST_APPLICATION_ID)
//!     .sign(&signing_key());
//!
//! let authenticator = Authenticator::new(test_auth_config());
//! ```

pub mod crypto_fixtures;
pub mod key_loaders;
pub mod test_ids;
pub mod token_builders;

// Re-export commonly used items
pub use crypto_fixtures::*;
pub use key_loaders::*;
pub use test_ids::*;
pub use token_builders::*;
