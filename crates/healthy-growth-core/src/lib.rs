// ABOUTME: Core types for the Healthy Growth child BMI estimator
// ABOUTME: Foundation crate with the percentile table, estimator, models, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

#![deny(unsafe_code)]

//! # Healthy Growth Core
//!
//! Foundation crate for the Healthy Growth estimator. It holds everything that
//! does not depend on a transport: the BMI-for-age reference table, the pure
//! estimator, the input models and the shared error type.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions and form input limits
//! - **models**: Gender, measurements, submitted forms, and classifications
//! - **growth**: Percentile reference table and the BMI estimator
//!
//! ## Example
//!
//! ```rust
//! use healthy_growth_core::growth::BmiEstimator;
//! use healthy_growth_core::models::{Classification, Gender, Measurement};
//!
//! # fn main() -> healthy_growth_core::errors::AppResult<()> {
//! let measurement = Measurement::new(10, Gender::Boy, 140.0, 28.0);
//! let assessment = BmiEstimator::standard().estimate(&measurement)?;
//! assert!((assessment.bmi - 14.3).abs() < f64::EPSILON);
//! assert_eq!(assessment.classification, Classification::Healthy);
//! # Ok(())
//! # }
//! ```

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversions and input limits
pub mod constants;

/// Input and output models (gender, measurement, form, classification)
pub mod models;

/// BMI-for-age reference table and estimator
pub mod growth;

/// Estimator configuration
pub mod config;

pub use config::EstimatorConfig;
pub use errors::{AppError, AppResult, ErrorCode};
pub use growth::{BmiAssessment, BmiEstimator, GrowthBand, GrowthCurvePoint, GrowthTable};
pub use models::{Classification, FieldValue, Gender, Measurement, MeasurementForm};
