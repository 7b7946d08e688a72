// ABOUTME: Estimate command for healthy-growth-cli
// ABOUTME: Validates the measurement form and prints the result summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

use super::print_output;
use healthy_growth::errors::AppResult;
use healthy_growth::formatters::{EstimateResponse, OutputFormat};
use healthy_growth::logging::AppLogger;
use healthy_growth_core::{BmiEstimator, EstimatorConfig, MeasurementForm};

/// Validate, estimate, and print
pub fn run(form: &MeasurementForm, config: &EstimatorConfig, format: OutputFormat) -> AppResult<()> {
    let measurement = form.validate(config).inspect_err(|e| {
        AppLogger::log_rejected_submission(e.code.description(), e.context.field.as_deref());
    })?;
    let assessment = BmiEstimator::standard().estimate(&measurement)?;

    AppLogger::log_estimate(
        assessment.gender,
        assessment.classification,
        assessment.reference.is_some(),
    );

    print_output(&EstimateResponse::from_assessment(&assessment), format)
}
