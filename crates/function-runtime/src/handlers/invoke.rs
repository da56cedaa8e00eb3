//! Function invocation handler.
//!
//! Stands in for the user's function: it echoes what it was called with and
//! the access the auth middleware granted.

use axum::{extract::Request, Json};
use function_auth::{Access, AccessExt};
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
pub struct InvokeResponse {
    pub method: String,
    pub path: String,
    pub access: Option<Access>,
}

#[instrument(skip_all, name = "function_runtime.invoke")]
pub async fn invoke(req: Request) -> Json<InvokeResponse> {
    let access = req.access();

    tracing::debug!(
        target: "function_runtime",
        method = %req.method(),
        path = %req.uri().path(),
        "Function invoked"
    );

    Json(InvokeResponse {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        access,
    })
}
