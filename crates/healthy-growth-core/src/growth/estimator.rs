// ABOUTME: Pure BMI estimator comparing a measurement against the BMI-for-age reference table
// ABOUTME: Computes weight / height² and derives classification and advice from the matching band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

use super::table::{GrowthBand, GrowthTable};
use crate::constants::{fields, units::CM_PER_METER};
use crate::errors::{AppError, AppResult};
use crate::models::{Classification, Gender, Measurement};
use serde::Serialize;
use tracing::debug;

/// Body mass index in kg/m² from height in centimeters and weight in kilograms
///
/// # Errors
///
/// Returns `VALUE_OUT_OF_RANGE` if either value is not a positive finite number,
/// or if the result underflows to zero or overflows
///
/// # Example
///
/// ```rust
/// use healthy_growth_core::growth::body_mass_index;
///
/// # fn main() -> healthy_growth_core::errors::AppResult<()> {
/// let bmi = body_mass_index(140.0, 28.0)?;
/// assert!((bmi - 14.285_714).abs() < 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn body_mass_index(height_cm: f64, weight_kg: f64) -> AppResult<f64> {
    if !(height_cm.is_finite() && height_cm > 0.0) {
        return Err(
            AppError::out_of_range(format!("Height must be a positive number of cm, got {height_cm}"))
                .with_field(fields::HEIGHT_CM),
        );
    }
    if !(weight_kg.is_finite() && weight_kg > 0.0) {
        return Err(
            AppError::out_of_range(format!("Weight must be a positive number of kg, got {weight_kg}"))
                .with_field(fields::WEIGHT_KG),
        );
    }

    let height_m = height_cm / CM_PER_METER;
    let height_sq = height_m * height_m;
    if !height_sq.is_normal() {
        return Err(AppError::out_of_range(format!(
            "Height of {height_cm} cm is outside the computable range"
        ))
        .with_field(fields::HEIGHT_CM));
    }

    // Rounding scales by ten, so the scaled value must stay finite as well
    let bmi = weight_kg / height_sq;
    if !(bmi.is_normal() && round_to_tenth(bmi).is_finite()) {
        return Err(AppError::out_of_range(format!(
            "BMI for {weight_kg} kg at {height_cm} cm is outside the computable range"
        ))
        .with_field(fields::WEIGHT_KG));
    }
    Ok(bmi)
}

/// Round to one decimal place, half away from zero
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Outcome of one estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiAssessment {
    /// BMI rounded to one decimal (kg/m²)
    pub bmi: f64,
    /// Unrounded BMI, used for classification
    #[serde(skip)]
    pub raw_bmi: f64,
    /// Position relative to the healthy band
    pub classification: Classification,
    /// Advisory message for the classification
    pub advice: &'static str,
    /// Age the assessment was made for
    pub age: u32,
    /// Gender the assessment was made for
    pub gender: Gender,
    /// Matched reference band, absent when the age is outside the table
    pub reference: Option<GrowthBand>,
}

impl BmiAssessment {
    /// Status label for the classification
    #[must_use]
    pub const fn status(&self) -> &'static str {
        self.classification.label()
    }
}

/// Stateless estimator bound to a reference table
#[derive(Debug, Clone, Copy)]
pub struct BmiEstimator<'a> {
    table: &'a GrowthTable,
}

impl BmiEstimator<'static> {
    /// Estimator over the standard reference table
    #[must_use]
    pub fn standard() -> Self {
        Self::new(GrowthTable::standard())
    }
}

impl Default for BmiEstimator<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> BmiEstimator<'a> {
    /// Estimator over a specific table
    #[must_use]
    pub const fn new(table: &'a GrowthTable) -> Self {
        Self { table }
    }

    /// Reference table in use
    #[must_use]
    pub const fn table(&self) -> &'a GrowthTable {
        self.table
    }

    /// Compute BMI and classify it against the band for the measurement's age
    ///
    /// Ages the table does not cover still yield a BMI, classified as
    /// [`Classification::Unclassified`].
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` if height or weight is not a positive finite number
    pub fn estimate(&self, measurement: &Measurement) -> AppResult<BmiAssessment> {
        let raw_bmi = body_mass_index(measurement.height_cm, measurement.weight_kg)?;
        let reference = self
            .table
            .band_for(measurement.gender, measurement.age)
            .copied();
        let classification =
            reference.map_or(Classification::Unclassified, |band| band.classify(raw_bmi));

        debug!(
            age = measurement.age,
            gender = %measurement.gender,
            classification = %classification,
            "BMI estimate computed"
        );

        Ok(BmiAssessment {
            bmi: round_to_tenth(raw_bmi),
            raw_bmi,
            classification,
            advice: classification.advice(),
            age: measurement.age,
            gender: measurement.gender,
            reference,
        })
    }
}
