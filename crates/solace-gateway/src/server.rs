// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use solace_agent::Agent;
use solace_config::model::GatewayConfig;
use solace_core::SolaceError;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    pub agent: Arc<Agent>,
    /// Process start time for uptime calculation.
    pub start_time: Instant,
}

impl GatewayState {
    pub fn new(agent: Arc<Agent>) -> Self {
        Self {
            agent,
            start_time: Instant::now(),
        }
    }
}

/// Build the router with every route and middleware layer attached.
pub fn build_router(state: GatewayState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route("/api/chat", post(handlers::post_chat))
        .route("/api/meditation", get(handlers::get_meditation))
        .route("/api/insights", get(handlers::get_insights))
        .route("/api/check-in", post(handlers::post_check_in))
        .route("/api/farewell", post(handlers::post_farewell))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

/// Permissive when no origins are configured. Unparseable origins are skipped.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the gateway HTTP server.
///
/// Binds to the configured host:port and serves until `shutdown` is cancelled.
pub async fn start_server(
    config: &GatewayConfig,
    state: GatewayState,
    shutdown: CancellationToken,
) -> Result<(), SolaceError> {
    let app = build_router(state, &config.cors_origins);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| SolaceError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| SolaceError::Internal(format!("gateway server error: {e}")))?;

    info!("Gateway server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_accepts_valid_and_skips_invalid_origins() {
        let _layer = cors_layer(&["https://example.com".into(), "bad\norigin".into()]);
        let _permissive = cors_layer(&[]);
    }
}
