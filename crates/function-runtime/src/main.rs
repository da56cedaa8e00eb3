//! Function Runtime
//!
//! Serves a function over HTTP, authenticating each invocation with the
//! token injected by the platform gateway.

use function_auth::{Authenticator, CachingKeyLoader};
use function_runtime::config::RuntimeConfig;
use function_runtime::routes;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // LOG_FORMAT=json switches to structured output for log shippers
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "function_runtime=info,function_auth=info,tower_http=info".into()
            }),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(tracing_subscriber::fmt::layer))
        .init();

    info!(target: "function_runtime", "Starting function runtime");

    let config = RuntimeConfig::from_env().map_err(|e| {
        error!(target: "function_runtime", "Failed to load configuration: {}", e);
        e
    })?;

    info!(
        target: "function_runtime",
        bind_address = %config.bind_address,
        request_timeout_seconds = config.request_timeout.as_secs(),
        is_public = config.auth.identity.is_public,
        application_id = %config.auth.identity.application_id,
        namespace_id = %config.auth.identity.namespace_id,
        clock_skew_seconds = config.auth.clock_skew.as_secs(),
        "Configuration loaded successfully"
    );

    if !config.auth.identity.is_public && config.auth.public_key_pem.trim().is_empty() {
        warn!(
            target: "function_runtime",
            "No public key configured, every authenticated request will be rejected"
        );
    }

    let authenticator = Arc::new(Authenticator::with_key_loader(
        config.auth.clone(),
        Arc::new(CachingKeyLoader::new()),
    ));

    let app = routes::build_routes(authenticator, config.request_timeout);

    let addr: SocketAddr = config.bind_address.parse().map_err(|e| {
        error!(target: "function_runtime", "Invalid bind address: {}", e);
        e
    })?;

    info!(target: "function_runtime", "Function runtime listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(target: "function_runtime", "Function runtime shutdown complete");

    Ok(())
}

/// Listens for shutdown signals (SIGTERM, SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!(target: "function_runtime", "Received SIGINT, starting graceful shutdown..."),
            Err(e) => error!(target: "function_runtime", "Failed to listen for SIGINT: {}", e),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!(target: "function_runtime", "Received SIGTERM, starting graceful shutdown...");
            }
            Err(e) => {
                error!(target: "function_runtime", "Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
