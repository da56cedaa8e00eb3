//! Authentication error kinds.
//!
//! Every failed check ends in exactly one `AuthError`. Variants carry no
//! payload: parser and verifier diagnostics are logged where they happen and
//! never reach the caller. The `IntoResponse` impl maps each kind to an HTTP
//! status with a JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Reason an authentication check rejected a request.
///
/// Maps to HTTP status codes:
/// - NoToken, TokenInvalid: 401 Unauthorized
/// - ClaimsInvalid, ClaimMismatch: 403 Forbidden
/// - InvalidPublicKey, MissingApplicationId, MissingNamespaceId: 500 (runtime misconfiguration)
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthError {
    #[error("Authentication token was not provided in the request")]
    NoToken,

    #[error("Invalid public key")]
    InvalidPublicKey,

    #[error("The authentication token is invalid or expired")]
    TokenInvalid,

    #[error("Invalid claims")]
    ClaimsInvalid,

    #[error("Application ID was not provided")]
    MissingApplicationId,

    #[error("Namespace ID was not provided")]
    MissingNamespaceId,

    #[error("Token claims do not authorize this function")]
    ClaimMismatch,
}

impl AuthError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::NoToken | AuthError::TokenInvalid => StatusCode::UNAUTHORIZED,
            AuthError::ClaimsInvalid | AuthError::ClaimMismatch => StatusCode::FORBIDDEN,
            AuthError::InvalidPublicKey
            | AuthError::MissingApplicationId
            | AuthError::MissingNamespaceId => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code for the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::NoToken => "NO_TOKEN",
            AuthError::InvalidPublicKey => "INVALID_PUBLIC_KEY",
            AuthError::TokenInvalid => "INVALID_TOKEN",
            AuthError::ClaimsInvalid => "INVALID_CLAIMS",
            AuthError::MissingApplicationId => "MISSING_APPLICATION_ID",
            AuthError::MissingNamespaceId => "MISSING_NAMESPACE_ID",
            AuthError::ClaimMismatch => "CLAIM_MISMATCH",
        }
    }

    /// True when the function itself is misconfigured rather than the caller's
    /// credential being wrong.
    pub fn is_misconfiguration(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidPublicKey
                | AuthError::MissingApplicationId
                | AuthError::MissingNamespaceId
        )
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if self.is_misconfiguration() {
            // Log actual kind server-side, return generic message to client
            tracing::error!(target: "function_auth.errors", error = %self, "Function auth is misconfigured");
            "An internal error occurred".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.code(),
                message,
            },
        };

        let mut response = (status, Json(body)).into_response();

        if status == StatusCode::UNAUTHORIZED {
            if let Ok(header_value) = "SCW_FUNCTIONS_TOKEN realm=\"function\"".parse() {
                response
                    .headers_mut()
                    .insert(axum::http::header::WWW_AUTHENTICATE, header_value);
            }
        }

        response
    }
}
