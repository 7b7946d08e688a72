// ABOUTME: Plain-text renderings of an estimate and of a growth curve
// ABOUTME: The result summary is the shareable text shown alongside a result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

use healthy_growth_core::growth::{BmiAssessment, GrowthCurvePoint};
use healthy_growth_core::models::Gender;
use std::fmt;

/// Shareable text summary of one estimate
#[derive(Debug, Clone, Copy)]
pub struct ResultSummary<'a> {
    assessment: &'a BmiAssessment,
}

impl<'a> ResultSummary<'a> {
    /// Summarize an assessment
    #[must_use]
    pub const fn from_assessment(assessment: &'a BmiAssessment) -> Self {
        Self { assessment }
    }
}

impl fmt::Display for ResultSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.assessment;
        writeln!(f, "Healthy Growth results:")?;
        writeln!(f, "Age: {} years", a.age)?;
        writeln!(f, "Gender: {}", a.gender.label())?;
        writeln!(f, "BMI (kg/m²): {:.1}", a.bmi)?;
        writeln!(f, "Status: {}", a.status())?;
        write!(f, "Advice: {}", a.advice)
    }
}

/// Fixed-width text table of a growth curve
#[derive(Debug, Clone, Copy)]
pub struct GrowthCurveTable<'a> {
    gender: Gender,
    points: &'a [GrowthCurvePoint],
}

impl<'a> GrowthCurveTable<'a> {
    /// Render the given points
    #[must_use]
    pub const fn new(gender: Gender, points: &'a [GrowthCurvePoint]) -> Self {
        Self { gender, points }
    }
}

impl fmt::Display for GrowthCurveTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Healthy BMI range by age ({}), kg/m²", self.gender.label())?;
        writeln!(f, "{:>4}  {:>6}  {:>6}  {:>8}", "Age", "Min", "Max", "Midpoint")?;
        for point in self.points {
            writeln!(
                f,
                "{:>4}  {:>6.1}  {:>6.1}  {:>8.2}",
                point.age, point.min, point.max, point.midpoint
            )?;
        }
        Ok(())
    }
}
