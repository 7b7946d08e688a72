// ABOUTME: Service names, environment variable keys, and configuration defaults
// ABOUTME: Central place for the values the server and CLI read from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

//! # Constants Module
//!
//! Application constants and the names of the environment variables that
//! configure the service.

/// Service identifiers used in logs
pub mod service_names {
    /// HTTP server service name
    pub const HEALTHY_GROWTH_SERVER: &str = "healthy-growth-server";
    /// Command-line tool name
    pub const HEALTHY_GROWTH_CLI: &str = "healthy-growth-cli";
}

/// Environment variable names
pub mod env_vars {
    /// Bind address
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Comma-separated CORS origins, `*` for any
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Enforce the form's input ranges
    pub const STRICT_RANGES: &str = "HEALTHY_GROWTH_STRICT_RANGES";
}

/// Configuration defaults
pub mod defaults {
    /// Default bind address
    pub const HTTP_HOST: &str = "127.0.0.1";
    /// Default bind port
    pub const HTTP_PORT: u16 = 8081;
    /// Default CORS origin list
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Default per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// HTTP route paths
pub mod paths {
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Readiness probe
    pub const READY: &str = "/ready";
    /// BMI estimate endpoint
    pub const BMI: &str = "/api/bmi";
    /// Growth curve endpoint, parameterized by gender
    pub const GROWTH_CURVE: &str = "/api/growth-curve/:gender";
}
