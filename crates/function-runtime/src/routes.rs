//! Router setup.

use crate::handlers;
use axum::{
    middleware,
    routing::{any, get},
    Router,
};
use function_auth::{require_function_auth, Authenticator};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Build the runtime router.
///
/// `/health` is public. Every other path and method reaches the function
/// handler through `require_function_auth`.
pub fn build_routes(authenticator: Arc<Authenticator>, request_timeout: Duration) -> Router {
    let public_routes = Router::new().route("/health", get(handlers::health_check));

    let function_routes = Router::new()
        .route("/", any(handlers::invoke))
        .route("/*path", any(handlers::invoke))
        .route_layer(middleware::from_fn_with_state(
            authenticator,
            require_function_auth,
        ));

    public_routes
        .merge(function_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
}
