//! Builder patterns for test data construction
//!
//! Provides a fluent API for creating signed function tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Map, Value};

/// Builder for creating test function tokens
///
/// Defaults: `sub = "test-subject"`, `iat = now`, `exp = now + 1h`, no `nbf`,
/// no `application_claim`, RS256.
///
/// # Example
/// ```rust,ignore
/// let token = TestTokenBuilder::new()
///     .with_application_claim("ns-1", "app-1")
///     .expires_in(60)
///     .sign(&signing_key());
/// ```
pub struct TestTokenBuilder {
    sub: String,
    exp: Option<i64>,
    iat: Option<i64>,
    nbf: Option<i64>,
    application_claims: Option<Value>,
    extra: Map<String, Value>,
    algorithm: Algorithm,
}

impl TestTokenBuilder {
    /// Create a new token builder with defaults
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            sub: "test-subject".to_string(),
            exp: Some((now + Duration::seconds(3600)).timestamp()),
            iat: Some(now.timestamp()),
            nbf: None,
            application_claims: None,
            extra: Map::new(),
            algorithm: Algorithm::RS256,
        }
    }

    /// Set the subject
    pub fn for_subject(mut self, subject: &str) -> Self {
        self.sub = subject.to_string();
        self
    }

    /// Append one `{namespace_id, application_id}` entry to the claim list
    pub fn with_application_claim(mut self, namespace_id: &str, application_id: &str) -> Self {
        let entry = json!({
            "namespace_id": namespace_id,
            "application_id": application_id,
        });
        match &mut self.application_claims {
            Some(Value::Array(entries)) => entries.push(entry),
            _ => self.application_claims = Some(Value::Array(vec![entry])),
        }
        self
    }

    /// Replace the claim list with an arbitrary JSON value
    pub fn with_application_claims_value(mut self, value: Value) -> Self {
        self.application_claims = Some(value);
        self
    }

    /// Emit an empty claim list
    pub fn without_application_claims(mut self) -> Self {
        self.application_claims = Some(Value::Array(Vec::new()));
        self
    }

    /// Add an arbitrary claim
    pub fn with_claim(mut self, name: &str, value: Value) -> Self {
        self.extra.insert(name.to_string(), value);
        self
    }

    /// Set the signing algorithm (must be an RSA family algorithm)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set expiration in seconds from now (negative for already expired)
    pub fn expires_in(mut self, seconds: i64) -> Self {
        self.exp = Some((Utc::now() + Duration::seconds(seconds)).timestamp());
        self
    }

    /// Omit `exp`
    pub fn without_expiry(mut self) -> Self {
        self.exp = None;
        self
    }

    /// Set not-before in seconds from now
    pub fn not_before_in(mut self, seconds: i64) -> Self {
        self.nbf = Some((Utc::now() + Duration::seconds(seconds)).timestamp());
        self
    }

    /// Set issued-at timestamp
    pub fn issued_at(mut self, timestamp: i64) -> Self {
        self.iat = Some(timestamp);
        self
    }

    /// Omit `iat`
    pub fn without_issued_at(mut self) -> Self {
        self.iat = None;
        self
    }

    /// Build the claims as a JSON value
    pub fn build(&self) -> Value {
        let mut claims = self.extra.clone();
        claims.insert("sub".to_string(), json!(self.sub));
        if let Some(exp) = self.exp {
            claims.insert("exp".to_string(), json!(exp));
        }
        if let Some(iat) = self.iat {
            claims.insert("iat".to_string(), json!(iat));
        }
        if let Some(nbf) = self.nbf {
            claims.insert("nbf".to_string(), json!(nbf));
        }
        if let Some(entries) = &self.application_claims {
            claims.insert("application_claim".to_string(), entries.clone());
        }
        Value::Object(claims)
    }

    /// Build and sign the token
    pub fn sign(self, key: &EncodingKey) -> String {
        let header = Header::new(self.algorithm);
        encode(&header, &self.build(), key).expect("test token should sign")
    }
}

impl Default for TestTokenBuilder {
    fn default() -> Self {
        Self::new()
    }
}
