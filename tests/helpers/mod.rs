// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the in-process axum request helpers and router construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;

use healthy_growth::config::ServerConfig;
use healthy_growth::server::{build_router, ServerResources};
use std::sync::Arc;

/// Full router, middleware included, for the given configuration
pub fn app_with_config(config: ServerConfig) -> axum::Router {
    build_router(Arc::new(ServerResources::new(Arc::new(config))))
}

/// Full router with default configuration
#[allow(dead_code)]
pub fn app() -> axum::Router {
    app_with_config(ServerConfig::default())
}
