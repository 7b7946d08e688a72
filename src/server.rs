// ABOUTME: HTTP server assembly for the Healthy Growth estimator API
// ABOUTME: Holds shared resources, builds the axum router with its layer stack, and runs it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

//! HTTP server
//!
//! [`build_router`] is separate from [`run`] so tests can drive the full
//! router in-process with `tower::ServiceExt::oneshot`.

use crate::config::ServerConfig;
use crate::middleware::{create_request_span, request_id_from_headers, setup_cors};
use crate::routes::{BmiRoutes, HealthRoutes};
use anyhow::{Context, Result};
use axum::{body::Body, http::Request, Router};
use healthy_growth_core::BmiEstimator;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Estimator over the standard reference table
    pub estimator: BmiEstimator<'static>,
}

impl ServerResources {
    /// Create resources for the given configuration
    #[must_use]
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            estimator: BmiEstimator::standard(),
        }
    }
}

/// Build the full router with middleware applied
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let config = Arc::clone(&resources.config);

    let layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                create_request_span(
                    request.method().as_str(),
                    request.uri().path(),
                    request_id_from_headers(request.headers()),
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(setup_cors(&config.cors))
        .layer(TimeoutLayer::new(config.request_timeout()));

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(BmiRoutes::routes(resources))
        .layer(layers)
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(config: Arc<ServerConfig>) -> Result<()> {
    let address = config.bind_address();
    let resources = Arc::new(ServerResources::new(Arc::clone(&config)));
    let router = build_router(resources);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Healthy Growth server listening on http://{address}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Healthy Growth server stopped");
    Ok(())
}

/// Resolve on Ctrl+C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
