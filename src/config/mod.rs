// ABOUTME: Configuration management module for server settings loaded from the environment
// ABOUTME: Re-exports server, CORS, and estimator configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

//! Configuration module for the Healthy Growth server
//!
//! Configuration is environment-only; there are no config files.

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, ServerConfig};
pub use healthy_growth_core::EstimatorConfig;
