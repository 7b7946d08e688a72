// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Creates per-request spans carrying the x-request-id set by the request ID layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

use http::HeaderMap;

/// Header carrying the request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Read the request ID header, if present and valid UTF-8
#[must_use]
pub fn request_id_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Create a tracing span for HTTP requests
pub fn create_request_span(method: &str, path: &str, request_id: Option<&str>) -> tracing::Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = request_id.unwrap_or("unknown"),
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}
