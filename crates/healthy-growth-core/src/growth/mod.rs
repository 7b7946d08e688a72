// ABOUTME: BMI-for-age reference data and the pure estimator built on it
// ABOUTME: Re-exports the table, band, curve point, and assessment types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

/// Pure BMI estimator and its assessment output
pub mod estimator;
/// Static 5th-85th percentile reference bands per gender and age
pub mod table;

pub use estimator::{body_mass_index, round_to_tenth, BmiAssessment, BmiEstimator};
pub use table::{GrowthBand, GrowthCurvePoint, GrowthTable, GROWTH_TABLE};
