// ABOUTME: Data models for measurements, submitted forms, genders, and classifications
// ABOUTME: Re-exports the public model types used by the estimator and its callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

/// BMI-for-age classification and its fixed advice
pub mod classification;
/// Gender tag used to select a reference table
pub mod gender;
/// Typed measurements and the loosely typed form they are validated from
pub mod measurement;

pub use classification::Classification;
pub use gender::Gender;
pub use measurement::{FieldValue, Measurement, MeasurementForm};
