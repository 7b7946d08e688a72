// ABOUTME: Unit conversion constants and input limits for the BMI estimator
// ABOUTME: Mirrors the bounds the measurement form enforces on age, height, and weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

//! Constants shared by the estimator and the form validation.

/// Unit conversion constants
pub mod units {
    /// Centimeters in one meter
    pub const CM_PER_METER: f64 = 100.0;
}

/// Limits applied by the measurement form when strict ranges are enabled
pub mod form_limits {
    /// Youngest selectable age (years)
    pub const MIN_AGE_YEARS: u32 = 2;
    /// Oldest selectable age (years)
    pub const MAX_AGE_YEARS: u32 = 17;
    /// Smallest accepted height (cm)
    pub const MIN_HEIGHT_CM: f64 = 50.0;
    /// Largest accepted height (cm)
    pub const MAX_HEIGHT_CM: f64 = 200.0;
    /// Smallest accepted weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 5.0;
    /// Largest accepted weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 150.0;
}

/// Submitted field names, as they appear in the JSON form
pub mod fields {
    /// Age in whole years
    pub const AGE: &str = "age";
    /// `boy` or `girl`
    pub const GENDER: &str = "gender";
    /// Height in centimeters
    pub const HEIGHT_CM: &str = "heightCm";
    /// Weight in kilograms
    pub const WEIGHT_KG: &str = "weightKg";
}
