//! Token claim types and application claim extraction.

use crate::errors::AuthError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Name of the custom claim holding the list of application scopes.
pub const APPLICATION_CLAIM: &str = "application_claim";

/// One scope a token is authorized for.
///
/// Either field may be empty: a namespace-scoped token typically carries only
/// `namespace_id`, an application-scoped token only `application_id`. Missing
/// or `null` fields decode as empty strings and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationClaim {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub namespace_id: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub application_id: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// NumericDate claims may be fractional; non-numeric values are ignored.
fn lenient_numeric_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_f64))
}

impl ApplicationClaim {
    pub fn new(namespace_id: impl Into<String>, application_id: impl Into<String>) -> Self {
        Self {
            namespace_id: namespace_id.into(),
            application_id: application_id.into(),
        }
    }
}

/// Verified token body.
///
/// `application_claim` is kept undecoded so a malformed value surfaces as
/// `AuthError::ClaimsInvalid` from [`extract_application_claim`] rather than
/// as a token decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenClaimSet {
    /// Issued-at timestamp (Unix epoch seconds), if present and numeric.
    #[serde(
        default,
        deserialize_with = "lenient_numeric_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub iat: Option<f64>,

    /// Raw `application_claim` value, if present.
    #[serde(
        rename = "application_claim",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub application_claim: Option<Value>,

    /// Every other claim (`exp`, `nbf`, `sub`, ...).
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl TokenClaimSet {
    /// Look up any claim by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match name {
            APPLICATION_CLAIM => self.application_claim.as_ref(),
            _ => self.other.get(name),
        }
    }
}

/// Decode the application claims and return the first entry.
///
/// A missing or `null` field counts as an empty list. A `null` entry decodes
/// as a claim with both fields empty. Entries after the first are ignored.
///
/// # Errors
///
/// Returns `AuthError::ClaimsInvalid` if the field is not a list of claim
/// objects, or if the list is empty.
pub fn extract_application_claim(claims: &TokenClaimSet) -> Result<ApplicationClaim, AuthError> {
    let entries = match &claims.application_claim {
        None => Vec::new(),
        Some(value) => Vec::<Option<ApplicationClaim>>::deserialize(value)
            .map_err(|e| {
                tracing::debug!(
                    target: "function_auth.claims",
                    error = %e,
                    "Application claims have an unexpected shape"
                );
                AuthError::ClaimsInvalid
            })?
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect(),
    };

    if entries.len() > 1 {
        tracing::debug!(
            target: "function_auth.claims",
            count = entries.len(),
            "Only the first application claim is evaluated"
        );
    }

    entries.into_iter().next().ok_or_else(|| {
        tracing::debug!(target: "function_auth.claims", "Token carries no application claim");
        AuthError::ClaimsInvalid
    })
}
