// ABOUTME: JSON payloads returned by the estimate and growth-curve endpoints
// ABOUTME: Built from core assessments so the HTTP layer and CLI emit identical JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

use super::summary::{GrowthCurveTable, ResultSummary};
use healthy_growth_core::growth::{BmiAssessment, GrowthBand, GrowthCurvePoint, GrowthTable};
use healthy_growth_core::models::{Classification, Gender};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response body of `POST /api/bmi`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    /// BMI rounded to one decimal (kg/m²)
    pub bmi: f64,
    /// Classification against the reference band
    pub classification: Classification,
    /// Status label
    pub status: String,
    /// Advisory message
    pub advice: String,
    /// Age in whole years
    pub age: u32,
    /// Gender of the reference table
    pub gender: Gender,
    /// Matched band, `null` when the age is outside the table
    pub reference: Option<GrowthBand>,
    /// Plain-text summary of the result
    pub summary: String,
}

impl EstimateResponse {
    /// Build the response for an assessment
    #[must_use]
    pub fn from_assessment(assessment: &BmiAssessment) -> Self {
        Self {
            bmi: assessment.bmi,
            classification: assessment.classification,
            status: assessment.status().to_owned(),
            advice: assessment.advice.to_owned(),
            age: assessment.age,
            gender: assessment.gender,
            reference: assessment.reference,
            summary: ResultSummary::from_assessment(assessment).to_string(),
        }
    }
}

impl fmt::Display for EstimateResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary)
    }
}

/// Response body of `GET /api/growth-curve/:gender`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthCurveResponse {
    /// Gender of the curve
    pub gender: Gender,
    /// One point per covered age
    pub points: Vec<GrowthCurvePoint>,
}

impl GrowthCurveResponse {
    /// Build the curve for a gender from a table
    #[must_use]
    pub fn new(table: &GrowthTable, gender: Gender) -> Self {
        Self {
            gender,
            points: table.curve(gender),
        }
    }
}

impl fmt::Display for GrowthCurveResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        GrowthCurveTable::new(self.gender, &self.points).fmt(f)
    }
}
