//! Authenticator integration tests.
//!
//! Drives full checks through the public API with fixed keys and signed
//! tokens.

// Test code is allowed to use expect/unwrap for assertions
#![allow(clippy::unwrap_used, clippy::expect_used)]

use function_auth::{
    Access, AuthConfig, AuthError, Authenticator, CachingKeyLoader, KeyLoader, MatchedScope,
    RuntimeIdentity,
};
use function_auth_test_utils::*;
use std::sync::Arc;
use std::time::Duration;

fn token_for(namespace_id: &str, application_id: &str) -> String {
    TestTokenBuilder::new()
        .with_application_claim(namespace_id, application_id)
        .sign(&signing_key())
}

fn counting(config: AuthConfig) -> (Authenticator, Arc<CountingKeyLoader>) {
    let loader = Arc::new(CountingKeyLoader::new());
    let authenticator = Authenticator::with_key_loader(config, loader.clone());
    (authenticator, loader)
}

/// Public functions succeed whatever the token.
#[test]
fn test_public_function_allows_any_request() {
    let (auth, loader) = counting(public_auth_config());
    let expired = TestTokenBuilder::new()
        .with_application_claim(OTHER_NAMESPACE_ID, OTHER_APPLICATION_ID)
        .expires_in(-3600)
        .sign(&other_signing_key());

    for token in [None, Some(""), Some("garbage"), Some(expired.as_str())] {
        assert_eq!(auth.authenticate_token(token), Ok(Access::Public));
    }
    assert_eq!(loader.calls(), 0);
}

/// A missing token is reported before the key is loaded.
#[test]
fn test_missing_token_does_not_load_key() {
    let (auth, loader) = counting(test_auth_config());

    assert_eq!(auth.authenticate_token(None), Err(AuthError::NoToken));
    assert_eq!(auth.authenticate_token(Some("")), Err(AuthError::NoToken));
    assert_eq!(loader.calls(), 0);
}

#[test]
fn test_malformed_key_is_invalid_public_key() {
    let token = token_for(TEST_NAMESPACE_ID, TEST_APPLICATION_ID);

    for pem in ["", "not a pem", "-----BEGIN RSA PUBLIC KEY-----\n-----END RSA PUBLIC KEY-----"] {
        let auth = Authenticator::new(AuthConfig::new(test_identity(), pem));
        assert_eq!(
            auth.authenticate_token(Some(&token)),
            Err(AuthError::InvalidPublicKey),
            "{pem:?}"
        );
    }
}

#[test]
fn test_wrong_key_type_is_invalid_public_key() {
    let token = token_for(TEST_NAMESPACE_ID, TEST_APPLICATION_ID);

    for pem in [EC_PUBLIC_KEY_PEM, SIGNING_PUBLIC_KEY_SPKI_PEM] {
        let auth = Authenticator::new(AuthConfig::new(test_identity(), pem));
        assert_eq!(
            auth.authenticate_token(Some(&token)),
            Err(AuthError::InvalidPublicKey)
        );
    }
}

#[test]
fn test_token_signed_by_other_key_is_invalid() {
    let auth = Authenticator::new(test_auth_config());
    let token = TestTokenBuilder::new()
        .with_application_claim(TEST_NAMESPACE_ID, TEST_APPLICATION_ID)
        .sign(&other_signing_key());

    assert_eq!(
        auth.authenticate_token(Some(&token)),
        Err(AuthError::TokenInvalid)
    );
}

#[test]
fn test_expired_token_is_invalid() {
    let auth = Authenticator::new(test_auth_config());
    let token = TestTokenBuilder::new()
        .with_application_claim(TEST_NAMESPACE_ID, TEST_APPLICATION_ID)
        .expires_in(-60)
        .sign(&signing_key());

    assert_eq!(
        auth.authenticate_token(Some(&token)),
        Err(AuthError::TokenInvalid)
    );
}

#[test]
fn test_expired_token_accepted_within_configured_skew() {
    let config = test_auth_config().with_clock_skew(Duration::from_secs(300));
    let auth = Authenticator::new(config);
    let token = TestTokenBuilder::new()
        .with_application_claim(TEST_NAMESPACE_ID, TEST_APPLICATION_ID)
        .expires_in(-60)
        .sign(&signing_key());

    assert_eq!(
        auth.authenticate_token(Some(&token)),
        Ok(Access::Granted(MatchedScope::Namespace))
    );
}

#[test]
fn test_empty_application_claims_are_invalid() {
    let auth = Authenticator::new(test_auth_config());

    let empty = TestTokenBuilder::new()
        .without_application_claims()
        .sign(&signing_key());
    let absent = TestTokenBuilder::new().sign(&signing_key());
    let null = TestTokenBuilder::new()
        .with_application_claims_value(serde_json::Value::Null)
        .sign(&signing_key());
    let not_a_list = TestTokenBuilder::new()
        .with_application_claims_value(serde_json::json!({"namespace_id": TEST_NAMESPACE_ID}))
        .sign(&signing_key());

    for token in [empty, absent, null, not_a_list] {
        assert_eq!(
            auth.authenticate_token(Some(&token)),
            Err(AuthError::ClaimsInvalid)
        );
    }
}

/// Namespace match alone is enough.
#[test]
fn test_namespace_match_grants_access() {
    let auth = Authenticator::new(test_auth_config());
    let token = token_for(TEST_NAMESPACE_ID, OTHER_APPLICATION_ID);

    assert_eq!(
        auth.authenticate_token(Some(&token)),
        Ok(Access::Granted(MatchedScope::Namespace))
    );
}

/// Application match alone is enough.
#[test]
fn test_application_match_grants_access() {
    let auth = Authenticator::new(test_auth_config());
    let token = token_for(OTHER_NAMESPACE_ID, TEST_APPLICATION_ID);

    assert_eq!(
        auth.authenticate_token(Some(&token)),
        Ok(Access::Granted(MatchedScope::Application))
    );
}

#[test]
fn test_neither_match_is_mismatch() {
    let auth = Authenticator::new(test_auth_config());
    let token = token_for(OTHER_NAMESPACE_ID, OTHER_APPLICATION_ID);

    assert_eq!(
        auth.authenticate_token(Some(&token)),
        Err(AuthError::ClaimMismatch)
    );
}

/// Only the first claim entry is considered.
#[test]
fn test_only_first_claim_entry_is_matched() {
    let auth = Authenticator::new(test_auth_config());
    let token = TestTokenBuilder::new()
        .with_application_claim(OTHER_NAMESPACE_ID, OTHER_APPLICATION_ID)
        .with_application_claim(TEST_NAMESPACE_ID, TEST_APPLICATION_ID)
        .sign(&signing_key());

    assert_eq!(
        auth.authenticate_token(Some(&token)),
        Err(AuthError::ClaimMismatch)
    );
}

#[test]
fn test_missing_runtime_ids_are_misconfiguration() {
    let token = token_for("", "");

    let no_app = Authenticator::new(AuthConfig::new(
        RuntimeIdentity::private("", TEST_NAMESPACE_ID),
        SIGNING_PUBLIC_KEY_PEM,
    ));
    assert_eq!(
        no_app.authenticate_token(Some(&token)),
        Err(AuthError::MissingApplicationId)
    );

    let no_namespace = Authenticator::new(AuthConfig::new(
        RuntimeIdentity::private(TEST_APPLICATION_ID, ""),
        SIGNING_PUBLIC_KEY_PEM,
    ));
    assert_eq!(
        no_namespace.authenticate_token(Some(&token)),
        Err(AuthError::MissingNamespaceId)
    );
}

#[test]
fn test_same_inputs_same_verdict() {
    let auth = Authenticator::new(test_auth_config());
    let granted = token_for(TEST_NAMESPACE_ID, OTHER_APPLICATION_ID);
    let denied = token_for(OTHER_NAMESPACE_ID, OTHER_APPLICATION_ID);

    for token in [Some(granted.as_str()), Some(denied.as_str()), None] {
        let first = auth.authenticate_token(token);
        let second = auth.authenticate_token(token);
        assert_eq!(first, second);
    }
}

/// identity {app-1, ns-1, private}: [{ns-1, app-9}] passes, [{ns-2, app-9}] does not.
#[test]
fn test_end_to_end_example() {
    let auth = Authenticator::new(AuthConfig::new(
        RuntimeIdentity::private("app-1", "ns-1"),
        SIGNING_PUBLIC_KEY_PEM,
    ));

    assert_eq!(
        auth.authenticate_token(Some(&token_for("ns-1", "app-9"))),
        Ok(Access::Granted(MatchedScope::Namespace))
    );
    assert_eq!(
        auth.authenticate_token(Some(&token_for("ns-2", "app-9"))),
        Err(AuthError::ClaimMismatch)
    );
}

#[test]
fn test_caching_loader_verdicts_match_uncached() {
    let cache = Arc::new(CachingKeyLoader::new());
    let cached = Authenticator::with_key_loader(test_auth_config(), cache.clone());
    let uncached = Authenticator::new(test_auth_config());

    let tokens = [
        token_for(TEST_NAMESPACE_ID, TEST_APPLICATION_ID),
        token_for(OTHER_NAMESPACE_ID, OTHER_APPLICATION_ID),
        TestTokenBuilder::new()
            .with_application_claim(TEST_NAMESPACE_ID, TEST_APPLICATION_ID)
            .sign(&other_signing_key()),
    ];

    for token in &tokens {
        assert_eq!(
            cached.authenticate_token(Some(token)),
            uncached.authenticate_token(Some(token))
        );
    }
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_caching_loader_does_not_cache_bad_key() {
    let cache = Arc::new(CachingKeyLoader::new());
    let auth = Authenticator::with_key_loader(
        AuthConfig::new(test_identity(), "not a pem"),
        cache.clone(),
    );
    let token = token_for(TEST_NAMESPACE_ID, TEST_APPLICATION_ID);

    assert_eq!(
        auth.authenticate_token(Some(&token)),
        Err(AuthError::InvalidPublicKey)
    );
    assert!(cache.is_empty());
    assert!(cache.load(SIGNING_PUBLIC_KEY_PEM).is_ok());
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_authenticator_shared_across_threads() {
    let auth = Arc::new(Authenticator::with_key_loader(
        test_auth_config(),
        Arc::new(CachingKeyLoader::new()),
    ));
    let token = token_for(TEST_NAMESPACE_ID, TEST_APPLICATION_ID);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let auth = Arc::clone(&auth);
            let token = token.clone();
            std::thread::spawn(move || auth.authenticate_token(Some(&token)))
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            Ok(Access::Granted(MatchedScope::Namespace))
        );
    }
}

/// A `null` claim field is treated as empty, so the other field can still match.
#[test]
fn test_null_namespace_field_matches_on_application() {
    let auth = Authenticator::new(test_auth_config());
    let token = TestTokenBuilder::new()
        .with_application_claims_value(serde_json::json!([
            {"namespace_id": null, "application_id": TEST_APPLICATION_ID}
        ]))
        .sign(&signing_key());

    assert_eq!(
        auth.authenticate_token(Some(&token)),
        Ok(Access::Granted(MatchedScope::Application))
    );
}

/// A `null` entry is an empty claim: it decodes, then matches nothing.
#[test]
fn test_null_claim_entry_is_mismatch() {
    let auth = Authenticator::new(test_auth_config());
    let token = TestTokenBuilder::new()
        .with_application_claims_value(serde_json::json!([null]))
        .sign(&signing_key());

    assert_eq!(
        auth.authenticate_token(Some(&token)),
        Err(AuthError::ClaimMismatch)
    );
}

/// Keys injected with an unwrapped base64 body still verify.
#[test]
fn test_single_line_public_key_verifies() {
    let body: String = SIGNING_PUBLIC_KEY_PEM
        .lines()
        .filter(|line| !line.starts_with("-----"))
        .collect();
    let pem = format!("-----BEGIN RSA PUBLIC KEY-----\n{body}\n-----END RSA PUBLIC KEY-----");
    let auth = Authenticator::new(AuthConfig::new(test_identity(), pem));

    assert_eq!(
        auth.authenticate_token(Some(&token_for(TEST_NAMESPACE_ID, TEST_APPLICATION_ID))),
        Ok(Access::Granted(MatchedScope::Namespace))
    );
}
