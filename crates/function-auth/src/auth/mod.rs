//! Token authentication building blocks.
//!
//! # Components
//!
//! - `public_key` - PEM/PKCS#1 key loading behind the `KeyLoader` trait
//! - `key_cache` - `KeyLoader` that memoizes parsed keys
//! - `verifier` - JWT signature and temporal claim validation
//! - `claims` - Claim set and application claim extraction
//! - `matcher` - Namespace/application identity matching

pub mod claims;
pub mod key_cache;
pub mod matcher;
pub mod public_key;
pub mod verifier;

pub use claims::{extract_application_claim, ApplicationClaim, TokenClaimSet, APPLICATION_CLAIM};
pub use key_cache::CachingKeyLoader;
pub use matcher::{match_identity, MatchedScope};
pub use public_key::{load_public_key, KeyLoader, PemKeyLoader};
pub use verifier::verify_token;
