// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints for load balancers and uptime checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

//! Health check routes for service monitoring

use crate::constants::paths;
use axum::{routing::get, Json, Router};
use healthy_growth_core::growth::GrowthTable;
use healthy_growth_core::models::Gender;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler() -> Json<serde_json::Value> {
            // The reference table is compiled in; ready as soon as it is non-empty
            let table = GrowthTable::standard();
            let ready = Gender::ALL
                .iter()
                .all(|gender| !table.bands(*gender).is_empty());
            Json(serde_json::json!({
                "status": if ready { "ready" } else { "not_ready" },
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route(paths::HEALTH, get(health_handler))
            .route(paths::READY, get(ready_handler))
    }
}
