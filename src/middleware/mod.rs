// ABOUTME: HTTP middleware for request tracing, request IDs, and cross-origin access
// ABOUTME: Builds the tower-http layer stack applied to every Healthy Growth route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

/// Cross-origin policy for browser clients
pub mod cors;
/// Request spans and request ID propagation
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use self::tracing::{create_request_span, request_id_from_headers, REQUEST_ID_HEADER};
