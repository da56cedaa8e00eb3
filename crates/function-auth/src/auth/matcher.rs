//! Identity matching.
//!
//! A namespace-scoped token authorizes every application in the namespace; an
//! application-scoped token authorizes only that application. Either match is
//! enough.

use crate::auth::claims::ApplicationClaim;
use crate::config::RuntimeIdentity;
use crate::errors::AuthError;
use serde::Serialize;

/// Which comparison granted access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedScope {
    Namespace,
    Application,
}

/// Match a claim against the runtime identity.
///
/// The namespace is compared first, so a claim matching both reports
/// `MatchedScope::Namespace`. Callers must ensure both identity fields are
/// non-empty: an empty identity field equals an empty claim field.
///
/// # Errors
///
/// Returns `AuthError::ClaimMismatch` if neither field matches.
pub fn match_identity(
    claim: &ApplicationClaim,
    identity: &RuntimeIdentity,
) -> Result<MatchedScope, AuthError> {
    if claim.namespace_id == identity.namespace_id {
        return Ok(MatchedScope::Namespace);
    }
    if claim.application_id == identity.application_id {
        return Ok(MatchedScope::Application);
    }
    Err(AuthError::ClaimMismatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> RuntimeIdentity {
        RuntimeIdentity::private("app-1", "ns-1")
    }

    #[test]
    fn test_namespace_match() {
        let claim = ApplicationClaim::new("ns-1", "app-9");
        assert_eq!(
            match_identity(&claim, &identity()),
            Ok(MatchedScope::Namespace)
        );
    }

    #[test]
    fn test_application_match() {
        let claim = ApplicationClaim::new("ns-9", "app-1");
        assert_eq!(
            match_identity(&claim, &identity()),
            Ok(MatchedScope::Application)
        );
    }

    #[test]
    fn test_both_match_reports_namespace() {
        let claim = ApplicationClaim::new("ns-1", "app-1");
        assert_eq!(
            match_identity(&claim, &identity()),
            Ok(MatchedScope::Namespace)
        );
    }

    #[test]
    fn test_neither_matches() {
        let claim = ApplicationClaim::new("ns-2", "app-9");
        assert_eq!(
            match_identity(&claim, &identity()),
            Err(AuthError::ClaimMismatch)
        );
    }

    #[test]
    fn test_comparison_is_exact() {
        let claim = ApplicationClaim::new("NS-1", "app-1 ");
        assert_eq!(
            match_identity(&claim, &identity()),
            Err(AuthError::ClaimMismatch)
        );
    }

    #[test]
    fn test_empty_claim_fields_do_not_match_non_empty_identity() {
        let claim = ApplicationClaim::default();
        assert_eq!(
            match_identity(&claim, &identity()),
            Err(AuthError::ClaimMismatch)
        );
    }

    #[test]
    fn test_empty_identity_matches_empty_claim_field() {
        // Documents why the authenticator rejects empty identity fields first
        let claim = ApplicationClaim::new("", "app-9");
        let identity = RuntimeIdentity::private("app-1", "");
        assert_eq!(
            match_identity(&claim, &identity),
            Ok(MatchedScope::Namespace)
        );
    }
}
