// ABOUTME: Main library entry point for the Healthy Growth estimator service
// ABOUTME: Provides the HTTP API, configuration, logging, and output formatting around the core crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

#![deny(unsafe_code)]

//! # Healthy Growth
//!
//! Child BMI-for-age estimator. Given age, gender, height and weight it
//! computes BMI and compares it against a fixed percentile reference table,
//! reporting LOW, HEALTHY or HIGH together with an advisory message.
//!
//! ## Architecture
//!
//! - **healthy-growth-core**: Reference table, estimator, models, errors
//! - **Routes**: Thin axum handlers for the estimate and growth-curve endpoints
//! - **Server**: Shared resources, middleware stack, graceful shutdown
//! - **Formatters**: Response bodies, shareable summaries, text tables
//! - **Config**: Environment-driven server configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use healthy_growth::config::ServerConfig;
//! use healthy_growth::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Healthy Growth configured on {}", config.bind_address());
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Service names, environment variable names, defaults, and route paths
pub mod constants;

/// Error types re-exported from the core crate
pub mod errors;

/// Response bodies and human-readable output
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Request tracing and CORS middleware
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;
