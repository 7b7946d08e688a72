// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Tests the liveness and readiness endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;

/// Get health routes for testing
fn health_routes() -> axum::Router {
    healthy_growth::routes::health::HealthRoutes::routes()
}

// ============================================================================
// GET /health - Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_success() {
    let response = AxumTestRequest::get("/health").send(health_routes()).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");

    // Verify timestamp is in ISO 8601 format
    let timestamp_str = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp_str).is_ok());
}

// ============================================================================
// GET /ready - Readiness Check Tests
// ============================================================================

#[tokio::test]
async fn test_ready_endpoint_success() {
    let response = AxumTestRequest::get("/ready").send(health_routes()).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_through_full_router() {
    let response = AxumTestRequest::get("/health").send(helpers::app()).await;

    assert_eq!(response.status(), 200);
    assert!(response.header("x-request-id").is_some());
}

#[tokio::test]
async fn test_unknown_path_not_found() {
    let response = AxumTestRequest::get("/nope").send(health_routes()).await;

    assert_eq!(response.status(), 404);
}
