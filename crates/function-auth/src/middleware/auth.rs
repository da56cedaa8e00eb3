//! Authentication middleware for function routes.
//!
//! Runs the authenticator on the request headers and stores the granted
//! `Access` in the request extensions for handlers.

use crate::authenticator::{Access, Authenticator};
use crate::errors::AuthError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::instrument;

/// Middleware that rejects requests the authenticator does not allow.
///
/// # Token Header Format
///
/// ```text
/// SCW_FUNCTIONS_TOKEN: <jwt>
/// ```
///
/// # Response
///
/// - 401 Unauthorized if the token is missing or invalid
/// - 403 Forbidden if the token's claims do not cover this function
/// - 500 Internal Server Error if the function's key or identity is not configured
/// - Otherwise continues to the next handler with `Access` in extensions
#[instrument(skip_all, name = "function_auth.middleware")]
pub async fn require_function_auth(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let access = authenticator.authenticate(req.headers())?;

    req.extensions_mut().insert(access);

    Ok(next.run(req).await)
}

/// Extension trait for reading the granted access from a request.
pub trait AccessExt {
    /// Returns `None` if the auth middleware was not applied to this request.
    fn access(&self) -> Option<Access>;
}

impl<B> AccessExt for axum::extract::Request<B> {
    fn access(&self) -> Option<Access> {
        self.extensions().get::<Access>().copied()
    }
}
