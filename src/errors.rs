// ABOUTME: Error handling re-exports from healthy-growth-core for the server and CLI
// ABOUTME: Keeps `crate::errors::AppError` paths stable across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

//! # Unified Error Handling System
//!
//! The error types live in `healthy-growth-core`; with the `http-response`
//! feature enabled, [`AppError`] converts directly into an axum response with
//! the status from [`ErrorCode::http_status`].

pub use healthy_growth_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
};
