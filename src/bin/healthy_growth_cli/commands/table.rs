// ABOUTME: Reference table command for healthy-growth-cli
// ABOUTME: Prints the healthy BMI band for every age covered for one gender
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

use super::print_output;
use healthy_growth::errors::AppResult;
use healthy_growth::formatters::{GrowthCurveResponse, OutputFormat};
use healthy_growth_core::{Gender, GrowthTable};

/// Print the growth curve for `gender`
pub fn run(gender: &str, format: OutputFormat) -> AppResult<()> {
    let gender = gender.parse::<Gender>()?;
    print_output(&GrowthCurveResponse::new(GrowthTable::standard(), gender), format)
}
