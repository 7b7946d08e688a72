// ABOUTME: Integration tests for the formatters module
// ABOUTME: Tests the text summary, the growth curve table, and JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use healthy_growth::errors::{AppError, ErrorCode};
use healthy_growth::formatters::{
    format_output, EstimateResponse, FormatError, GrowthCurveResponse, OutputFormat, ResultSummary,
};
use healthy_growth_core::{BmiAssessment, BmiEstimator, Gender, GrowthTable, Measurement};

fn assess(age: u32, gender: Gender, height_cm: f64, weight_kg: f64) -> BmiAssessment {
    BmiEstimator::standard()
        .estimate(&Measurement::new(age, gender, height_cm, weight_kg))
        .unwrap()
}

#[test]
fn test_output_format_from_str() {
    assert_eq!(OutputFormat::from_str_param("json"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str_param("JSON"), OutputFormat::Json);
    // Unknown defaults to text
    assert_eq!(OutputFormat::from_str_param("xml"), OutputFormat::Text);
    assert_eq!(OutputFormat::from_str_param(""), OutputFormat::Text);
}

#[test]
fn test_output_format_content_type() {
    assert_eq!(OutputFormat::Json.content_type(), "application/json");
    assert_eq!(
        OutputFormat::Text.content_type(),
        "text/plain; charset=utf-8"
    );
}

#[test]
fn test_result_summary_text() {
    let assessment = assess(10, Gender::Boy, 140.0, 28.0);
    let summary = ResultSummary::from_assessment(&assessment).to_string();

    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[0], "Healthy Growth results:");
    assert_eq!(lines[1], "Age: 10 years");
    assert_eq!(lines[2], "Gender: Boy");
    assert_eq!(lines[3], "BMI (kg/m²): 14.3");
    assert_eq!(lines[4], "Status: Healthy weight");
    assert!(lines[5].starts_with("Advice: Great work!"));
}

#[test]
fn test_summary_for_unclassified_age() {
    let assessment = assess(18, Gender::Girl, 165.0, 55.0);
    let summary = ResultSummary::from_assessment(&assessment).to_string();

    assert!(summary.contains("Status: Basic calculation"));
    assert!(summary.contains("no percentile reference"));
}

#[test]
fn test_format_estimate_text_and_json() {
    let response = EstimateResponse::from_assessment(&assess(10, Gender::Boy, 140.0, 45.0));

    let text = format_output(&response, OutputFormat::Text).unwrap();
    assert_eq!(text.data, response.summary);
    assert_eq!(text.format, OutputFormat::Text);

    let json = format_output(&response, OutputFormat::Json).unwrap();
    let parsed: EstimateResponse = serde_json::from_str(&json.data).unwrap();
    assert_eq!(parsed, response);
    assert_eq!(json.content_type, "application/json");
}

#[test]
fn test_growth_curve_table_text() {
    let curve = GrowthCurveResponse::new(GrowthTable::standard(), Gender::Boy);
    let text = format_output(&curve, OutputFormat::Text).unwrap().data;

    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].contains("(Boy)"));
    // Title, column header, then one row per age 2..=17
    assert_eq!(lines.len(), 18);
    let first_row: Vec<&str> = lines[2].split_whitespace().collect();
    assert_eq!(first_row[..3], ["2", "14.7", "18.2"]);
    assert_eq!(lines[17].split_whitespace().next(), Some("17"));
}

#[test]
fn test_format_error_converts_to_serialization_error() {
    let error = AppError::from(FormatError {
        message: "number out of range".to_owned(),
        format: OutputFormat::Json,
    });

    assert_eq!(error.code, ErrorCode::SerializationError);
    assert_eq!(error.message, "number out of range");
    assert_eq!(error.http_status(), 500);
    assert!(std::error::Error::source(&error).is_some());
}
