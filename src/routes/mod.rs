// ABOUTME: Route module organization for the Healthy Growth HTTP endpoints
// ABOUTME: Groups probe routes and estimator routes with thin handlers over the core crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

//! Route module for the Healthy Growth server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to `healthy-growth-core`.

/// BMI estimate and growth curve routes
pub mod bmi;
/// Health check and readiness routes
pub mod health;

/// BMI route handlers
pub use bmi::BmiRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
