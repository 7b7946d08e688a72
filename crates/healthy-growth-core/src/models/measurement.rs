// ABOUTME: Measurement input for the estimator and the submitted form it is validated from
// ABOUTME: Rejects missing, non-numeric, and non-positive fields before any computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

use crate::config::EstimatorConfig;
use crate::constants::{fields, form_limits};
use crate::errors::{AppError, AppResult};
use crate::models::Gender;
use serde::{Deserialize, Serialize};

/// A validated measurement, ready for the estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Age in whole years
    pub age: u32,
    /// Selects the reference table
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
}

impl Measurement {
    /// Create a measurement without validation
    #[must_use]
    pub const fn new(age: u32, gender: Gender, height_cm: f64, weight_kg: f64) -> Self {
        Self {
            age,
            gender,
            height_cm,
            weight_kg,
        }
    }
}

/// A submitted numeric field: either a JSON number or the raw text of a form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// JSON number
    Number(f64),
    /// Text as typed into the form
    Text(String),
}

impl FieldValue {
    /// Numeric value of the field, `None` when the text is blank
    ///
    /// # Errors
    ///
    /// Returns `INVALID_FORMAT` if the text is not a number or the value is not finite
    pub fn to_number(&self, field: &str) -> AppResult<Option<f64>> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed.parse::<f64>().map_err(|e| {
                    AppError::invalid_format(format!("Field '{field}' must be numeric, got '{trimmed}'"))
                        .with_field(field)
                        .with_source(e)
                })?
            }
        };

        if value.is_finite() {
            Ok(Some(value))
        } else {
            Err(AppError::invalid_format(format!("Field '{field}' must be a finite number"))
                .with_field(field))
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Measurement form as submitted; every field may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementForm {
    /// Age in whole years
    #[serde(default)]
    pub age: Option<FieldValue>,
    /// `boy` or `girl`
    #[serde(default)]
    pub gender: Option<String>,
    /// Height in centimeters
    #[serde(default, alias = "height")]
    pub height_cm: Option<FieldValue>,
    /// Weight in kilograms
    #[serde(default, alias = "weight")]
    pub weight_kg: Option<FieldValue>,
}

impl MeasurementForm {
    /// Validate the form into a [`Measurement`]
    ///
    /// Ages outside the reference table are accepted unless `config` enforces
    /// the form ranges; the estimator reports them as unclassified.
    ///
    /// # Errors
    ///
    /// - `MISSING_REQUIRED_FIELD` if any field is absent or blank
    /// - `INVALID_FORMAT` if a field does not parse, or age is negative or fractional
    /// - `VALUE_OUT_OF_RANGE` if height or weight is not positive, or a strict
    ///   range is violated
    pub fn validate(&self, config: &EstimatorConfig) -> AppResult<Measurement> {
        let age = Self::parse_age(required_number(self.age.as_ref(), fields::AGE)?)?;
        let gender = self.parse_gender()?;
        let height_cm = required_number(self.height_cm.as_ref(), fields::HEIGHT_CM)?;
        let weight_kg = required_number(self.weight_kg.as_ref(), fields::WEIGHT_KG)?;

        require_positive(height_cm, fields::HEIGHT_CM)?;
        require_positive(weight_kg, fields::WEIGHT_KG)?;

        if config.enforce_form_ranges {
            Self::check_form_ranges(age, height_cm, weight_kg)?;
        }

        Ok(Measurement::new(age, gender, height_cm, weight_kg))
    }

    fn parse_gender(&self) -> AppResult<Gender> {
        let raw = self
            .gender
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .ok_or_else(|| AppError::missing_field(fields::GENDER))?;
        raw.parse::<Gender>()
            .map_err(|e| e.with_field(fields::GENDER))
    }

    fn parse_age(age: f64) -> AppResult<u32> {
        if age < 0.0 || age.fract() != 0.0 {
            return Err(
                AppError::invalid_format(format!("Field 'age' must be a whole number of years, got {age}"))
                    .with_field(fields::AGE),
            );
        }
        if age > f64::from(u32::MAX) {
            return Err(AppError::out_of_range(format!("Field 'age' is too large: {age}"))
                .with_field(fields::AGE));
        }
        Ok(age as u32)
    }

    fn check_form_ranges(age: u32, height_cm: f64, weight_kg: f64) -> AppResult<()> {
        if !(form_limits::MIN_AGE_YEARS..=form_limits::MAX_AGE_YEARS).contains(&age) {
            return Err(AppError::out_of_range(format!(
                "Age must be between {} and {} years",
                form_limits::MIN_AGE_YEARS,
                form_limits::MAX_AGE_YEARS
            ))
            .with_field(fields::AGE)
            .with_details(range_details(
                form_limits::MIN_AGE_YEARS,
                form_limits::MAX_AGE_YEARS,
                age,
            )));
        }
        if !(form_limits::MIN_HEIGHT_CM..=form_limits::MAX_HEIGHT_CM).contains(&height_cm) {
            return Err(AppError::out_of_range(format!(
                "Height must be between {} and {} cm",
                form_limits::MIN_HEIGHT_CM,
                form_limits::MAX_HEIGHT_CM
            ))
            .with_field(fields::HEIGHT_CM)
            .with_details(range_details(
                form_limits::MIN_HEIGHT_CM,
                form_limits::MAX_HEIGHT_CM,
                height_cm,
            )));
        }
        if !(form_limits::MIN_WEIGHT_KG..=form_limits::MAX_WEIGHT_KG).contains(&weight_kg) {
            return Err(AppError::out_of_range(format!(
                "Weight must be between {} and {} kg",
                form_limits::MIN_WEIGHT_KG,
                form_limits::MAX_WEIGHT_KG
            ))
            .with_field(fields::WEIGHT_KG)
            .with_details(range_details(
                form_limits::MIN_WEIGHT_KG,
                form_limits::MAX_WEIGHT_KG,
                weight_kg,
            )));
        }
        Ok(())
    }
}

/// Accepted bounds and the submitted value, for client-side hints
fn range_details<T: Serialize>(min: T, max: T, value: T) -> serde_json::Value {
    serde_json::json!({ "min": min, "max": max, "value": value })
}

fn required_number(value: Option<&FieldValue>, field: &str) -> AppResult<f64> {
    value
        .map(|v| v.to_number(field))
        .transpose()?
        .flatten()
        .ok_or_else(|| AppError::missing_field(field))
}

fn require_positive(value: f64, field: &str) -> AppResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(AppError::out_of_range(format!("Field '{field}' must be greater than zero"))
            .with_field(field))
    }
}
